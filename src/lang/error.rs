pub struct Error {
    code: u16,
    address: Option<usize>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $addr:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).at_address($addr)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $addr:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .at_address($addr)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            address: None,
            message: String::new(),
        }
    }

    /// Stream exhaustion is the one expected way for a run to end.
    pub fn is_end_of_program(&self) -> bool {
        self.code == ErrorCode::EndOfProgram as u16
    }

    pub fn is_break(&self) -> bool {
        self.code == ErrorCode::Break as u16
    }

    pub fn at_address(self, address: usize) -> Error {
        debug_assert!(self.address.is_none());
        Error {
            address: Some(address),
            ..self
        }
    }

    pub fn message(self, message: &str) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.to_string(),
            ..self
        }
    }
}

pub enum ErrorCode {
    EndOfProgram = 1,
    Break = 2,
    ReadFailure = 3,
    WriteFailure = 4,
    InputFailure = 5,
    NoInput = 6,
    PointerOutOfRange = 7,
    UnknownInstruction = 8,
    UnmatchedLoop = 9,
    InternalError = 51,
    FileNotFound = 53,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            1 => "END OF PROGRAM",
            2 => "BREAK",
            3 => "READ FAILURE",
            4 => "WRITE FAILURE",
            5 => "INPUT FAILURE",
            6 => "NO INPUT SOURCE",
            7 => "POINTER OUT OF RANGE",
            8 => "UNKNOWN INSTRUCTION",
            9 => "UNMATCHED LOOP",
            51 => "INTERNAL ERROR",
            53 => "FILE NOT FOUND",
            _ => "",
        };
        let mut suffix = String::new();
        if let Some(address) = self.address {
            suffix.push_str(&format!(" AT {}", address));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if code_str.is_empty() {
            write!(f, "PROGRAM ERROR {}{}", self.code, suffix)
        } else {
            write!(f, "{}{}", code_str, suffix)
        }
    }
}
