use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No options were provided to choose from.")]
    EmptyOptions,

    #[error("Could not switch the terminal to raw mode: {}", .0)]
    TerminalUnavailable(std::io::Error),

    #[error("Input stream closed before a selection was made.")]
    InputClosed,

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}
