use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::error::Error;

/// Read the comment body line by line until end of input, terminating every line with `\n`.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD.
pub(crate) async fn read_body<R>(input: R) -> Result<String, Error>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.split(b'\n');
    let mut body = String::new();
    while let Some(mut line) = lines.next_segment().await.map_err(Error::Stdin)? {
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        body.push_str(&String::from_utf8_lossy(&line));
        body.push('\n');
    }
    Ok(body)
}
