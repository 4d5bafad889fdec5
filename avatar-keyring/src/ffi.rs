//! FFI bindings for the keyring
//!
//! C-compatible entry points for the secret manager. Every function takes a
//! completion callback and an opaque `user_data` pointer that is handed back
//! untouched. The callback runs exactly once, before the function returns:
//! on success `error` is null and `result` holds the secret record as JSON, on
//! failure `result` is null and `error` holds a message. Both strings are only
//! valid for the duration of the callback.
//!
//! The return value is 0 on success or a stable error code: the
//! [`SecretError::code`] of the failure, or one of the `AVATAR_KEYRING_ERROR_*`
//! codes below for failures at the boundary itself.
//!
//! SECURITY: mnemonic and secret key inputs, and the JSON handed to the
//! callback, are zeroized once the call completes.

use std::ffi::{c_void, CStr, CString};
use std::future::Future;
use std::os::raw::c_char;
use std::ptr;
use zeroize::{Zeroize, Zeroizing};

use crate::core::crypto::keys::{parse_stellar_secret, SecureSeedPhrase};
use crate::core::manager::SecretManager;
use crate::domain::SecretRecord;
use crate::shared::error::{Result, SecretError};

/// Completion callback: `(user_data, error, result)`
pub type AvatarKeyringCallback =
    Option<extern "C" fn(user_data: *mut c_void, error: *const c_char, result: *const c_char)>;

/// No callback was supplied; nothing was done
pub const AVATAR_KEYRING_ERROR_NULL_CALLBACK: i32 = 100;
/// A string argument was null or not UTF-8
pub const AVATAR_KEYRING_ERROR_INVALID_INPUT: i32 = 101;
/// The async runtime could not be started
pub const AVATAR_KEYRING_ERROR_RUNTIME: i32 = 102;

/// Pointer validation. Content checks belong to the keyring itself so that
/// bad mnemonics and secrets report their own error kinds.
fn read_c_str(input: *const c_char) -> std::result::Result<Zeroizing<String>, String> {
    if input.is_null() {
        return Err("Null input pointer".to_string());
    }

    let input_str = unsafe {
        match CStr::from_ptr(input).to_str() {
            Ok(s) => s,
            Err(_) => return Err("Invalid UTF-8 input".to_string()),
        }
    };

    Ok(Zeroizing::new(input_str.to_string()))
}

/// Build a C string, dropping interior NUL bytes
fn to_c_string(text: String) -> CString {
    CString::new(text).unwrap_or_else(|e| {
        let mut bytes = e.into_vec();
        bytes.retain(|b| *b != 0);
        CString::new(bytes).unwrap_or_default()
    })
}

fn fail(
    callback: extern "C" fn(*mut c_void, *const c_char, *const c_char),
    user_data: *mut c_void,
    code: i32,
    message: String,
) -> i32 {
    let message = to_c_string(message);
    callback(user_data, message.as_ptr(), ptr::null());
    code
}

fn succeed(
    callback: extern "C" fn(*mut c_void, *const c_char, *const c_char),
    user_data: *mut c_void,
    record: &SecretRecord,
) -> i32 {
    let json = match serde_json::to_string(record) {
        Ok(json) => json,
        Err(e) => {
            let err = SecretError::Serialization(e);
            return fail(callback, user_data, err.code(), err.to_string());
        }
    };

    let result = to_c_string(json);
    callback(user_data, ptr::null(), result.as_ptr());
    result.into_bytes().zeroize();
    0
}

/// Run one manager operation to completion on a private runtime
fn run<F, Fut>(
    callback: extern "C" fn(*mut c_void, *const c_char, *const c_char),
    user_data: *mut c_void,
    operation: F,
) -> i32
where
    F: FnOnce(SecretManager) -> Fut,
    Fut: Future<Output = Result<SecretRecord>>,
{
    let rt = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            return fail(
                callback,
                user_data,
                AVATAR_KEYRING_ERROR_RUNTIME,
                format!("Runtime creation failed: {}", e),
            )
        }
    };

    let outcome = rt.block_on(async {
        let manager = SecretManager::from_env()?;
        operation(manager).await
    });

    match outcome {
        Ok(record) => succeed(callback, user_data, &record),
        Err(err) => report(callback, user_data, err),
    }
}

fn report(
    callback: extern "C" fn(*mut c_void, *const c_char, *const c_char),
    user_data: *mut c_void,
    err: SecretError,
) -> i32 {
    log::debug!("FFI operation failed: {}", err);
    fail(callback, user_data, err.code(), err.to_string())
}

/// Generate a fresh mnemonic, derive every key and write the secret file
#[no_mangle]
pub extern "C" fn avatar_keyring_create(callback: AvatarKeyringCallback, user_data: *mut c_void) -> i32 {
    let Some(callback) = callback else {
        return AVATAR_KEYRING_ERROR_NULL_CALLBACK;
    };
    run(callback, user_data, |manager| async move { manager.create().await })
}

/// Derive every key from a caller supplied mnemonic and write the secret file
#[no_mangle]
pub extern "C" fn avatar_keyring_from_mnemonic(
    words: *const c_char,
    callback: AvatarKeyringCallback,
    user_data: *mut c_void,
) -> i32 {
    let Some(callback) = callback else {
        return AVATAR_KEYRING_ERROR_NULL_CALLBACK;
    };
    let words = match read_c_str(words) {
        Ok(words) => words,
        Err(message) => return fail(callback, user_data, AVATAR_KEYRING_ERROR_INVALID_INPUT, message),
    };
    // Reject a bad phrase before the secret file location is resolved
    if let Err(err) = SecureSeedPhrase::parse(&words) {
        return report(callback, user_data, err);
    }
    run(callback, user_data, move |manager| async move {
        manager.from_mnemonic(&words).await
    })
}

/// Rotate the Stellar key to the given `S...` secret seed
#[no_mangle]
pub extern "C" fn avatar_keyring_update_wallet_key(
    stellar_secret: *const c_char,
    callback: AvatarKeyringCallback,
    user_data: *mut c_void,
) -> i32 {
    let Some(callback) = callback else {
        return AVATAR_KEYRING_ERROR_NULL_CALLBACK;
    };
    let secret = match read_c_str(stellar_secret) {
        Ok(secret) => secret,
        Err(message) => return fail(callback, user_data, AVATAR_KEYRING_ERROR_INVALID_INPUT, message),
    };
    if let Err(err) = parse_stellar_secret(&secret) {
        return report(callback, user_data, err);
    }
    run(callback, user_data, move |manager| async move {
        manager.update_wallet_key(&secret).await
    })
}

/// Read the persisted secret record
#[no_mangle]
pub extern "C" fn avatar_keyring_load_secret_data(
    callback: AvatarKeyringCallback,
    user_data: *mut c_void,
) -> i32 {
    let Some(callback) = callback else {
        return AVATAR_KEYRING_ERROR_NULL_CALLBACK;
    };
    run(callback, user_data, |manager| async move { manager.load_secret_data().await })
}
