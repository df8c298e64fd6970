//! Classification of database errors into infrastructure failures and
//! query/logic failures.

use std::io;

/// Return `true` when `err` means the database could not be reached or the
/// connection was lost, as opposed to a statement that failed on a healthy
/// connection.
///
/// Covers refused/reset/timed-out connections, DNS lookup failures, TLS
/// handshake failures, protocol loss, and pool exhaustion or shutdown.
pub fn is_connection_error(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Io(io_err) => is_connection_io_error(io_err),
        sqlx::Error::Tls(_)
        | sqlx::Error::Protocol(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => true,
        _ => false,
    }
}

fn is_connection_io_error(err: &io::Error) -> bool {
    use io::ErrorKind;

    if matches!(
        err.kind(),
        ErrorKind::ConnectionRefused
            | ErrorKind::ConnectionReset
            | ErrorKind::ConnectionAborted
            | ErrorKind::NotConnected
            | ErrorKind::TimedOut
            | ErrorKind::BrokenPipe
            | ErrorKind::UnexpectedEof
            | ErrorKind::AddrNotAvailable
    ) {
        return true;
    }

    // DNS failures surface as uncategorized I/O errors.
    let message = err.to_string().to_lowercase();
    message.contains("connect") || message.contains("lookup")
}
