/// Maps a file name to its Content-Type using the last dot-separated segment.
///
/// Matching is case-sensitive. Names without an extension, and extensions not
/// in the table, are served as `text/plain`.
pub fn content_type_for(filename: &str) -> &'static str {
    let extension = filename.rsplit_once('.').map(|(_, ext)| ext);

    match extension {
        Some("js") => "application/javascript",
        Some("jpg") => "image/jpg",
        Some("png") => "image/png",
        Some("html") => "text/html",
        _ => "text/plain",
    }
}
