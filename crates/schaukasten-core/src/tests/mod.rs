mod cluster;
mod dates;
mod keywords;
mod window;

use crate::Incident;

pub(crate) fn incident(
    district: Option<&str>,
    keywords: &[&str],
    date: Option<&str>,
) -> Incident {
    Incident {
        body: String::new(),
        district: district.map(str::to_string),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        genders: Vec::new(),
        times: Vec::new(),
        date_extracted: date.map(str::to_string),
        date_raw: None,
        url: None,
    }
}
