//! Delegate backend for a reference shared library
//!
//! Loads a C library exposing the entry points `prvkey`, `id`, `sign`,
//! `hash` and `recoverid`, each taking and returning NUL-terminated hex
//! strings. Used for interoperability testing against the reference
//! implementation; the pure core must produce byte-identical output.

use std::env;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::path::Path;

use libloading::{Library, Symbol};

use super::Backend;
use crate::error::{Error, Result};

const LIB_ENV: &str = "CRYPTOLIB";
const DEFAULT_LIB_PATH: &str = "/usr/local/lib/libcryptolib.so";

/// A backend that forwards every operation to the shared library
pub struct NativeBackend {
    lib: Library,
}

impl NativeBackend {
    /// Load the library named by `CRYPTOLIB`, or the default install path
    pub fn load() -> Result<Self> {
        let path = env::var(LIB_ENV).unwrap_or_else(|_| DEFAULT_LIB_PATH.to_string());
        Self::open(Path::new(&path))
    }

    /// Load the library at an explicit path
    pub fn open(path: &Path) -> Result<Self> {
        let lib = unsafe { Library::new(path) }.map_err(|e| Error::Native {
            operation: "load",
            details: e.to_string(),
        })?;
        Ok(NativeBackend { lib })
    }

    fn read_output(operation: &'static str, ptr: *const c_char) -> Result<String> {
        if ptr.is_null() {
            return Err(Error::Native {
                operation,
                details: "library returned a null pointer".to_string(),
            });
        }
        let text = unsafe { CStr::from_ptr(ptr) };
        text.to_str()
            .map(str::to_owned)
            .map_err(|e| Error::Native {
                operation,
                details: e.to_string(),
            })
    }

    fn arg(operation: &'static str, value: &str) -> Result<CString> {
        CString::new(value).map_err(|e| Error::Native {
            operation,
            details: e.to_string(),
        })
    }

    fn call0(&self, name: &[u8], operation: &'static str) -> Result<String> {
        let func: Symbol<unsafe extern "C" fn() -> *const c_char> =
            unsafe { self.lib.get(name) }.map_err(|e| Error::Native {
                operation,
                details: e.to_string(),
            })?;
        Self::read_output(operation, unsafe { func() })
    }

    fn call1(&self, name: &[u8], operation: &'static str, a: &str) -> Result<String> {
        let func: Symbol<unsafe extern "C" fn(*const c_char) -> *const c_char> =
            unsafe { self.lib.get(name) }.map_err(|e| Error::Native {
                operation,
                details: e.to_string(),
            })?;
        let a = Self::arg(operation, a)?;
        Self::read_output(operation, unsafe { func(a.as_ptr()) })
    }

    fn call2(
        &self,
        name: &[u8],
        operation: &'static str,
        a: &str,
        b: &str,
    ) -> Result<String> {
        let func: Symbol<unsafe extern "C" fn(*const c_char, *const c_char) -> *const c_char> =
            unsafe { self.lib.get(name) }.map_err(|e| Error::Native {
                operation,
                details: e.to_string(),
            })?;
        let a = Self::arg(operation, a)?;
        let b = Self::arg(operation, b)?;
        Self::read_output(operation, unsafe { func(a.as_ptr(), b.as_ptr()) })
    }
}

impl Backend for NativeBackend {
    fn prvkey(&self) -> Result<String> {
        self.call0(b"prvkey\0", "prvkey")
    }

    fn id(&self, prvkey: &str) -> Result<String> {
        self.call1(b"id\0", "id", prvkey)
    }

    fn hash(&self, data: &str) -> Result<String> {
        self.call1(b"hash\0", "hash", data)
    }

    fn sign(&self, msg: &str, prvkey: &str) -> Result<String> {
        self.call2(b"sign\0", "sign", msg, prvkey)
    }

    fn recoverid(&self, digest: &str, signature: &str) -> Result<String> {
        self.call2(b"recoverid\0", "recoverid", digest, signature)
    }
}
