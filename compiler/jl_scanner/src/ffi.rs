//! C ABI entry points for the tree-sitter runtime.
//!
//! The generated Julia parser calls five `tree_sitter_julia_external_scanner_*`
//! symbols. They are thin shims: convert the raw `TSLexer` into a [`Lexer`],
//! the `bool` array into [`ValidSymbols`], and forward to [`Scanner`].
//!
//! The payload pointer is always null because the scanner has no state.
#![allow(
    unsafe_code,
    reason = "C ABI boundary: raw TSLexer pointers and no_mangle exports"
)]

use std::ffi::{c_char, c_void};
use std::ptr;

use crate::{Lexer, Scanner, TokenType, ValidSymbols};

/// Cursor handed over by the tree-sitter runtime.
///
/// Layout-compatible with `TSLexer` from `tree_sitter/parser.h`. Newer
/// runtimes append fields after `eof`; they are never read here, and the
/// struct is only ever accessed through the runtime's own pointer.
#[repr(C)]
pub struct TSLexer {
    pub lookahead: i32,
    pub result_symbol: u16,
    pub advance: unsafe extern "C" fn(*mut TSLexer, bool),
    pub mark_end: unsafe extern "C" fn(*mut TSLexer),
    pub get_column: unsafe extern "C" fn(*mut TSLexer) -> u32,
    pub is_at_included_range_start: unsafe extern "C" fn(*const TSLexer) -> bool,
    pub eof: unsafe extern "C" fn(*const TSLexer) -> bool,
}

/// [`Lexer`] view of a runtime-owned `TSLexer`.
struct HostLexer {
    raw: *mut TSLexer,
}

impl Lexer for HostLexer {
    fn lookahead(&self) -> char {
        // SAFETY: `raw` is the live lexer passed to `scan`, valid for the
        // duration of the call.
        let code = unsafe { (*self.raw).lookahead };
        u32::try_from(code)
            .ok()
            .and_then(char::from_u32)
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    fn advance(&mut self, skip: bool) {
        // SAFETY: as above; the callback is supplied by the runtime.
        unsafe { ((*self.raw).advance)(self.raw, skip) }
    }

    fn mark_end(&mut self) {
        // SAFETY: as above.
        unsafe { ((*self.raw).mark_end)(self.raw) }
    }

    fn is_eof(&self) -> bool {
        // SAFETY: as above.
        unsafe { ((*self.raw).eof)(self.raw) }
    }
}

/// Create the scanner payload. Stateless, so always null.
#[no_mangle]
pub extern "C" fn tree_sitter_julia_external_scanner_create() -> *mut c_void {
    ptr::null_mut()
}

/// Destroy the scanner payload. Nothing was allocated.
#[no_mangle]
pub extern "C" fn tree_sitter_julia_external_scanner_destroy(_payload: *mut c_void) {}

/// Serialize scanner state. Writes nothing.
#[no_mangle]
pub extern "C" fn tree_sitter_julia_external_scanner_serialize(
    _payload: *mut c_void,
    _buffer: *mut c_char,
) -> u32 {
    // Nothing is written, so the runtime's buffer is never touched.
    let written = Scanner::new().serialize(&mut []);
    u32::try_from(written).unwrap_or(0)
}

/// Restore scanner state. The saved state is always empty.
#[no_mangle]
pub extern "C" fn tree_sitter_julia_external_scanner_deserialize(
    _payload: *mut c_void,
    _buffer: *const c_char,
    _length: u32,
) {
    Scanner::new().deserialize(&[]);
}

/// Scan one external token.
///
/// # Safety
///
/// `lexer` must point to a live `TSLexer` and `valid_symbols` to at least
/// [`TokenType::COUNT`] readable `bool`s, as the tree-sitter runtime
/// guarantees.
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_julia_external_scanner_scan(
    _payload: *mut c_void,
    lexer: *mut TSLexer,
    valid_symbols: *const bool,
) -> bool {
    if lexer.is_null() || valid_symbols.is_null() {
        return false;
    }
    // SAFETY: the caller guarantees `TokenType::COUNT` readable entries.
    let valid = ValidSymbols::from_bools(unsafe {
        std::slice::from_raw_parts(valid_symbols, TokenType::COUNT)
    });
    let mut host = HostLexer { raw: lexer };
    match Scanner::new().scan(&mut host, valid) {
        Some(kind) => {
            // SAFETY: `lexer` is live and non-null (checked above).
            unsafe { (*lexer).result_symbol = u16::from(kind as u8) };
            true
        }
        None => false,
    }
}
