//! The eight instruction symbols. Any other byte in a source stream is a
//! comment and never occupies a program position.

pub const FORWARD: u8 = b'>';
pub const BACK: u8 = b'<';
pub const INCREMENT: u8 = b'+';
pub const DECREMENT: u8 = b'-';
pub const OUTPUT: u8 = b'.';
pub const INPUT: u8 = b',';
pub const LOOP_OPEN: u8 = b'[';
pub const LOOP_CLOSE: u8 = b']';
