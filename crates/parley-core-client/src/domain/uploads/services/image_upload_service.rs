// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use url::Url;

use crate::domain::uploads::models::UploadFile;

#[async_trait]
#[cfg_attr(any(test, feature = "test"), mockall::automock)]
pub trait ImageUploadService: Send + Sync {
    /// Uploads `file` and returns the URL it can be downloaded from.
    async fn upload_image(&self, file: UploadFile) -> Result<Url>;
}
