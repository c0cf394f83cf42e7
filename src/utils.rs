use crate::types::{ParsedFilename, ShowDate};

/// Parses an upload filename into show name and broadcast date.
///
/// The convention is `"<show name> <dd>.<mm>.<yyyy>.mp3"`: the name is split
/// on the LAST space, the fragment after it loses its `.mp3` suffix and is
/// split on `.` into day, month and year. A fragment that does not yield
/// exactly three components comes back as [`ParsedFilename::MalformedDate`].
/// A filename without any space is all show name (`.mp3` stripped), no date.
///
/// Date components are kept as strings so zero padding survives into titles
/// and tracklist URLs.
pub fn parse_filename(filename: &str) -> ParsedFilename {
    match filename.rsplit_once(' ') {
        Some((show_name, fragment)) => {
            let fragment = fragment.strip_suffix(".mp3").unwrap_or(fragment);
            let components: Vec<&str> = fragment.split('.').collect();
            match components.as_slice() {
                [day, month, year] => ParsedFilename::Dated {
                    show_name: show_name.to_string(),
                    date: ShowDate {
                        day: day.to_string(),
                        month: month.to_string(),
                        year: year.to_string(),
                    },
                },
                _ => ParsedFilename::MalformedDate {
                    show_name: show_name.to_string(),
                    fragment: fragment.to_string(),
                },
            }
        }
        None => ParsedFilename::Undated {
            show_name: filename.strip_suffix(".mp3").unwrap_or(filename).to_string(),
        },
    }
}

/// Builds the upload title: show name, an optional ` yyyy.mm.dd ` segment
/// and the host credit.
///
/// The date segment carries its own surrounding spaces, so a dated title
/// reads `"Show  2024.03.05  w/ Host"` with doubled spaces around the date.
/// Without a date the segment is omitted and the doubled space collapses
/// around nothing: `"Show  w/ Host"`.
pub fn build_title(show_name: &str, date: Option<&ShowDate>, host: &str) -> String {
    let date_segment = match date {
        Some(d) => format!(" {}.{}.{} ", d.year, d.month, d.day),
        None => String::new(),
    };
    format!("{} {} w/ {}", show_name, date_segment, host)
}

/// Builds the upload description: the show bio, with a tracklist link
/// appended only when a date was parsed from the filename.
///
/// The link path lowercases the show name and inverts the date to
/// `yyyy-mm-dd`: `http://<site>/shows/<show>/<yyyy>-<mm>-<dd>`.
pub fn build_description(
    bio: &str,
    show_name: &str,
    date: Option<&ShowDate>,
    site_url: &str,
) -> String {
    let mut description = bio.to_string();
    if let Some(d) = date {
        description.push_str(&format!(
            "\n\nTracklist: {site}/shows/{show}/{year}-{month}-{day}",
            site = site_url,
            show = show_name.to_lowercase(),
            year = d.year,
            month = d.month,
            day = d.day,
        ));
    }
    description
}

/// Turns a tag list into the indexed multipart field names Mixcloud expects,
/// capped at five tags and preserving catalog order.
///
/// A catalog entry with seven tags submits exactly
/// `tags-0-tag` through `tags-4-tag`.
pub fn tag_fields(tags: &[String]) -> Vec<(String, String)> {
    tags.iter()
        .take(5)
        .enumerate()
        .map(|(i, tag)| (format!("tags-{}-tag", i), tag.clone()))
        .collect()
}
