/// Link and image delimiters: `[text](url)` and `![alt](url)`.
pub struct Link;

impl Link {
    pub const IMAGE_BANG: u8 = b'!';
    pub const TEXT_OPEN: u8 = b'[';
    pub const TEXT_CLOSE: u8 = b']';
    pub const URL_OPEN: u8 = b'(';
    pub const URL_CLOSE: u8 = b')';
}
