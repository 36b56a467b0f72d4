use std::fs;
use std::path::Path;

use log::debug;

use crate::GeoPoint;
use crate::error::Error;

/// Parses one `"<latitude>, <longitude>"` point per line.
///
/// Blank lines are skipped. The first malformed line fails the whole input.
pub fn parse_points(text: &str) -> Result<Vec<GeoPoint>, Error> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| line.parse::<GeoPoint>()
            .map_err(|reason| Error::Parse {
                line: index + 1,
                content: line.to_owned(),
                reason,
            }))
        .collect()
}

/// Reads and parses the whole input resource at `path`.
pub fn load_points<P: AsRef<Path>>(path: P) -> Result<Vec<GeoPoint>, Error> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .map_err(|cause| Error::ResourceNotFound { path: path.to_owned(), cause })?;

    let points = parse_points(&text)?;
    debug!("Loaded {} points from {:?}", points.len(), path);

    Ok(points)
}
