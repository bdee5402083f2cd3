use crate::{Error, Result};

/// Languages the dictionary carries. English is the fallback for every key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Lang {
    #[default]
    En,
    De,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::En, Lang::De];

    pub fn tag(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::De => "de",
        }
    }

    pub fn from_tag(tag: &str) -> Result<Self> {
        match tag {
            "en" => Ok(Lang::En),
            "de" => Ok(Lang::De),
            other => Err(Error::UnknownLang {
                tag: other.to_string(),
            }),
        }
    }
}

const DICT_EN: &[(&str, &str)] = &[
    ("showcases", "Showcases"),
    ("subtitle", "Recoding Right-Wing Extremism"),
    (
        "description",
        "Showcases is a data-driven investigation that visualizes police reports on politically motivated crime, highlighting the growing normalization of xenophobic, transphobic and homophobic violence, as well as right-wing extremism in Germany.",
    ),
    (
        "sub",
        "This website automatically monitors police reports from Berlin and Brandenburg and updates the dataset daily.",
    ),
    ("enter", "Enter"),
    ("last", "Latest Incidents"),
    ("timeline", "Overview"),
    ("methodology", "Methodology"),
    ("de", "DE"),
    ("en", "EN"),
    ("controls_showingLast", "Showing the last"),
    ("controls_report_one", "police report"),
    ("controls_report_other", "police reports"),
    ("controls_mentioning", "mentioning:"),
    ("controls_any", "any"),
    ("controls_containing", ", containing"),
    ("controls_textPlaceholder", "text…"),
    ("controls_or", ", or"),
    ("controls_onlyLatest", "only the latest."),
];

const DICT_DE: &[(&str, &str)] = &[
    ("showcases", "Showcases"),
    ("subtitle", "Recoding Right-Wing Extremism"),
    (
        "description",
        "Showcases ist eine datengetriebene Recherche, die Polizeimeldungen zu politisch motivierter Kriminalität visualisiert und die zunehmende Normalisierung von fremdenfeindlicher, trans- und homofeindlicher Gewalt sowie von Rechtsextremismus in Deutschland sichtbar macht.",
    ),
    (
        "sub",
        "Diese Website überwacht Polizeimeldungen aus Berlin und Brandenburg automatisch und aktualisiert die Daten täglich.",
    ),
    ("enter", "Weiter"),
    ("last", "Neueste"),
    ("timeline", "Zeitleiste"),
    ("methodology", "Methodik"),
    ("de", "DE"),
    ("en", "EN"),
    ("controls_showingLast", "Zeige die letzten"),
    ("controls_report_one", "Polizeimeldung"),
    ("controls_report_other", "Polizeimeldungen"),
    ("controls_mentioning", "mit Erwähnung:"),
    ("controls_any", "beliebig"),
    ("controls_containing", ", mit"),
    ("controls_textPlaceholder", "Text…"),
    ("controls_or", ", oder"),
    ("controls_onlyLatest", "nur die neuesten."),
];

fn dict_for(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::En => DICT_EN,
        Lang::De => DICT_DE,
    }
}

fn lookup(lang: Lang, key: &str) -> Option<&'static str> {
    dict_for(lang)
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
}

/// Dictionary lookup with the fallback chain: selected language → English →
/// the key itself. Total: never fails on an unknown key.
pub fn t(lang: Lang, key: &str) -> String {
    lookup(lang, key)
        .or_else(|| lookup(Lang::En, key))
        .map(str::to_string)
        .unwrap_or_else(|| key.to_string())
}

/// Pluralized lookup: `base` selects `{base}_one` for a count of ±1 and
/// `{base}_other` otherwise, with the same fallback chain as [`t`]. The base
/// key itself is the last resort.
pub fn tn(lang: Lang, base: &str, count: i64) -> String {
    let form = if count.abs() == 1 { "one" } else { "other" };
    let key = format!("{base}_{form}");
    lookup(lang, &key)
        .or_else(|| lookup(Lang::En, &key))
        .map(str::to_string)
        .unwrap_or_else(|| base.to_string())
}

/// Persistence seam for the selected language. The visualization must keep
/// working when the host's storage is unavailable, so `save` failures are
/// swallowed at the call site ([`set_lang`]) and `load` is best-effort.
pub trait LangStore {
    fn load(&self) -> Option<String>;
    fn save(&mut self, tag: &str) -> std::io::Result<()>;
}

/// In-memory store, used as the default and in tests.
#[derive(Debug, Default)]
pub struct MemoryLangStore {
    saved: Option<String>,
}

impl LangStore for MemoryLangStore {
    fn load(&self) -> Option<String> {
        self.saved.clone()
    }

    fn save(&mut self, tag: &str) -> std::io::Result<()> {
        self.saved = Some(tag.to_string());
        Ok(())
    }
}

/// Validates and persists a language selection. A failing store does not
/// fail the switch; the returned `Lang` is authoritative either way.
pub fn set_lang(store: &mut dyn LangStore, tag: &str) -> Result<Lang> {
    let lang = Lang::from_tag(tag)?;
    if let Err(err) = store.save(lang.tag()) {
        tracing::debug!(%err, "language preference not persisted");
    }
    Ok(lang)
}

/// Restores the persisted language, defaulting to English when the store is
/// empty or holds an unknown tag.
pub fn initial_lang(store: &dyn LangStore) -> Lang {
    store
        .load()
        .and_then(|tag| Lang::from_tag(&tag).ok())
        .unwrap_or_default()
}
