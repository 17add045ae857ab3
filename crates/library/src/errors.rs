use anchor_lang::prelude::*;

pub type LibraryResult<T = ()> = std::result::Result<T, ErrorCodes>;

#[error_code]
pub enum ErrorCodes {
    #[msg(LIBRARY_MATH_ERROR)]
    LibraryMathError,

    #[msg(LIBRARY_CASTING_ERROR)]
    LibraryCastingFailure,

    #[msg(LIBRARY_UNSUPPORTED_TOKEN_EXTENSION)]
    LibraryUnsupportedTokenExtension,

    #[msg(LIBRARY_INVALID_TOKEN_MINT)]
    LibraryInvalidTokenMint,
}
