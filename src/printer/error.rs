use std::error::Error;
use std::fmt::{self, Display};

#[derive(Copy, Clone, Debug)]
pub enum PrintError {
    FmtError(fmt::Error),
}

impl Error for PrintError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PrintError::FmtError(err) => Some(err),
        }
    }
}

impl Display for PrintError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            PrintError::FmtError(ref err) => Display::fmt(err, formatter),
        }
    }
}

impl From<fmt::Error> for PrintError {
    fn from(f: fmt::Error) -> Self {
        PrintError::FmtError(f)
    }
}
