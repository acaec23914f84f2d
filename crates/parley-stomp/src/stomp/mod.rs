// parley/parley-stomp
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use frame::{Command, Frame, FrameDecoder};
pub use heart_beat::HeartBeat;

pub mod destinations;
mod frame;
mod heart_beat;
