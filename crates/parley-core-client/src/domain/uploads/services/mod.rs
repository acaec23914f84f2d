// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use image_upload_service::ImageUploadService;

mod image_upload_service;

#[cfg(any(test, feature = "test"))]
pub mod mocks {
    pub use super::image_upload_service::MockImageUploadService;
}
