//! The `explain` command: display documentation for error codes.

use calc_diagnostic::ErrorCode;

/// Print the long-form explanation of an error code such as `E2001`.
pub fn explain_error(code_str: &str) {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format EXXXX where X is a digit.");
        eprintln!("Examples: E0001, E1001, E2001, E6001");
        std::process::exit(1);
    };

    println!("{code}");
    println!();
    println!("{}", code.explanation());
}
