use serde::Serialize;

pub const ROOT_MESSAGE: &str = "Just a Simple Route initialization";

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn root() -> Self {
        Message {
            message: ROOT_MESSAGE.to_string(),
        }
    }
}
