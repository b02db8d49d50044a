/// Status code for a successful exit.
pub const EXIT_SUCCESS: i32 = 0;

/// Catch-all status code returned after reporting an error.
pub const EXIT_GENERAL_ERROR: i32 = 1;
