//! CLI response formatting and output.
//!
//! Provides the JSON envelope, printing, and exit code mapping.

use declfix::error::Hint;
use declfix::{Error, ErrorCode, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CliError>,
}

#[derive(Debug, Serialize)]
pub struct CliError {
    pub code: String,
    pub message: String,
    pub details: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hints: Option<Vec<Hint>>,
}

impl<T: Serialize> CliResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            Error::internal_json(e.to_string(), Some("serialize response".to_string()))
        })
    }
}

impl CliResponse<()> {
    pub fn from_error(err: &Error) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(CliError {
                code: err.code.as_str().to_string(),
                message: err.message.clone(),
                details: err.details.clone(),
                hints: if err.hints.is_empty() {
                    None
                } else {
                    Some(err.hints.clone())
                },
            }),
        }
    }
}

fn print_response<T: Serialize>(response: &CliResponse<T>) {
    use std::io::{self, Write};

    let payload = match response.to_json() {
        Ok(payload) => payload,
        Err(err) => {
            eprintln!("declfix: failed to serialize response: {}", err);
            return;
        }
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = writeln!(handle, "{}", payload) {
        // Exit quietly on SIGPIPE
        if e.kind() != io::ErrorKind::BrokenPipe {
            eprintln!("declfix: failed to write response: {}", e);
        }
    }
}

pub fn map_cmd_result_to_json<T: Serialize>(
    result: Result<(T, i32)>,
) -> (Result<serde_json::Value>, i32) {
    match result {
        Ok((data, exit_code)) => match serde_json::to_value(data) {
            Ok(value) => (Ok(value), exit_code),
            Err(err) => (
                Err(Error::internal_json(
                    err.to_string(),
                    Some("serialize response".to_string()),
                )),
                1,
            ),
        },
        Err(err) => {
            let exit_code = exit_code_for_error(err.code);
            (Err(err), exit_code)
        }
    }
}

fn exit_code_for_error(code: ErrorCode) -> i32 {
    match code {
        ErrorCode::ValidationInvalidArgument => 2,

        ErrorCode::ClasslistNotFound
        | ErrorCode::ClasslistEmpty
        | ErrorCode::ClasslistInvalidName => 4,

        ErrorCode::RewriteInvalidPattern
        | ErrorCode::InternalIoError
        | ErrorCode::InternalJsonError
        | ErrorCode::InternalUnexpected => 1,
    }
}

pub fn print_json_result(result: Result<serde_json::Value>) {
    match result {
        Ok(data) => print_response(&CliResponse::success(data)),
        Err(err) => print_response(&CliResponse::<()>::from_error(&err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_envelope_carries_code_and_hints() {
        let err = Error::classlist_not_found("/tmp/classes.txt");
        let json = CliResponse::<()>::from_error(&err).to_json().unwrap();

        assert!(json.contains("\"success\": false"));
        assert!(json.contains("\"code\": \"classlist.not_found\""));
        assert!(json.contains("/tmp/classes.txt"));
        assert!(json.contains("built-in table"));
    }

    #[test]
    fn success_envelope_skips_error_field() {
        let json = CliResponse::success(serde_json::json!({ "ok": true }))
            .to_json()
            .unwrap();

        assert!(json.contains("\"success\": true"));
        assert!(!json.contains("\"error\""));
    }

    #[test]
    fn validation_error_maps_to_exit_code_2() {
        let err = Error::validation_invalid_argument("path", "not a directory");
        let (_value, exit_code) = map_cmd_result_to_json::<serde_json::Value>(Err(err));
        assert_eq!(exit_code, 2);
    }

    #[test]
    fn classlist_error_maps_to_exit_code_4() {
        let err = Error::classlist_empty("classes.txt");
        let (_value, exit_code) = map_cmd_result_to_json::<serde_json::Value>(Err(err));
        assert_eq!(exit_code, 4);
    }

    #[test]
    fn io_error_maps_to_exit_code_1() {
        let err = Error::internal_io("permission denied", Some("write a.h".to_string()));
        let (_value, exit_code) = map_cmd_result_to_json::<serde_json::Value>(Err(err));
        assert_eq!(exit_code, 1);
    }

    #[test]
    fn success_keeps_command_exit_code() {
        let (value, exit_code) =
            map_cmd_result_to_json(Ok((serde_json::json!({ "known": false }), 1)));
        assert!(value.is_ok());
        assert_eq!(exit_code, 1);
    }
}
