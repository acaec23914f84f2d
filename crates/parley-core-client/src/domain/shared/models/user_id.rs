// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use parley_utils::id_number;

id_number!(
    /// The server-assigned id of a user account.
    UserId
);
