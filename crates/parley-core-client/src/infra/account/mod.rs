// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use static_credential_provider::StaticCredentialProvider;

mod static_credential_provider;
