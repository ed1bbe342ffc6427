use crate::calendar::WeekdayExt;
use std::env;
use time::{Month, Weekday};

/// The fixed set of UI strings, resolved per locale.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Labels {
    pub(crate) title: &'static str,
    pub(crate) previous_month: &'static str,
    pub(crate) next_month: &'static str,
    pub(crate) day_has_events: &'static str,
    pub(crate) day_no_events: &'static str,
    pub(crate) events_unavailable: &'static str,
}

/// Everything the display needs for one locale.  The day & month name
/// arrays are indexed by the canonical calendar types, so a profile cannot
/// be declared with the wrong number of entries.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct LocaleProfile {
    pub(crate) tag: &'static str,
    weekdays: [&'static str; 7],
    months: [&'static str; 12],
    pub(crate) labels: Labels,
}

impl LocaleProfile {
    pub(crate) fn weekday_name(&self, weekday: Weekday) -> &'static str {
        self.weekdays[usize::from(weekday.index0())]
    }

    pub(crate) fn month_name(&self, month: Month) -> &'static str {
        self.months[usize::from(u8::from(month)) - 1]
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum Locale {
    Italian,
    Spanish,
    French,
    German,
    #[default]
    English,
}

impl Locale {
    pub(crate) const ALL: [Locale; 5] = [
        Locale::Italian,
        Locale::Spanish,
        Locale::French,
        Locale::German,
        Locale::English,
    ];

    /// Exact match against the supported tags; `None` for anything else.
    fn from_tag(tag: &str) -> Option<Locale> {
        match tag {
            "it-IT" => Some(Locale::Italian),
            "es-ES" => Some(Locale::Spanish),
            "fr-FR" => Some(Locale::French),
            "de-DE" => Some(Locale::German),
            _ => None,
        }
    }

    /// Normalizes an environment-style tag (`it_IT.UTF-8` → `it-IT`) and
    /// resolves it, degrading to English for anything unsupported.
    pub(crate) fn resolve(raw: &str) -> Locale {
        let tag = normalize(raw);
        match Locale::from_tag(&tag) {
            Some(locale) => locale,
            None => {
                log::debug!("no profile for locale {raw:?}, using the default");
                Locale::English
            }
        }
    }

    /// The active locale of the environment, read once at startup.
    pub(crate) fn from_env() -> Locale {
        for var in ["LC_ALL", "LC_MESSAGES", "LANG"] {
            if let Ok(value) = env::var(var) {
                if !value.is_empty() {
                    return Locale::resolve(&value);
                }
            }
        }
        Locale::English
    }

    pub(crate) fn profile(self) -> &'static LocaleProfile {
        match self {
            Locale::Italian => &ITALIAN,
            Locale::Spanish => &SPANISH,
            Locale::French => &FRENCH,
            Locale::German => &GERMAN,
            Locale::English => &ENGLISH,
        }
    }
}

fn normalize(raw: &str) -> String {
    let base = raw.split(['.', '@']).next().unwrap_or(raw);
    base.replace('_', "-")
}

static ENGLISH: LocaleProfile = LocaleProfile {
    tag: "en-US",
    weekdays: [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ],
    months: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    labels: Labels {
        title: "Events Calendar",
        previous_month: "Previous Month",
        next_month: "Next Month",
        day_has_events: "Check out events of the day",
        day_no_events: "No event",
        events_unavailable: "Could not load events",
    },
};

static ITALIAN: LocaleProfile = LocaleProfile {
    tag: "it-IT",
    weekdays: [
        "Domenica",
        "Lunedì",
        "Martedì",
        "Mercoledì",
        "Giovedì",
        "Venerdì",
        "Sabato",
    ],
    months: [
        "Gennaio",
        "Febbraio",
        "Marzo",
        "Aprile",
        "Maggio",
        "Giugno",
        "Luglio",
        "Agosto",
        "Settembre",
        "Ottobre",
        "Novembre",
        "Dicembre",
    ],
    labels: Labels {
        title: "Calendario Eventi",
        previous_month: "Mese precedente",
        next_month: "Mese successivo",
        day_has_events: "Visualizza eventi del giorno",
        day_no_events: "Nessun evento",
        events_unavailable: "Impossibile caricare gli eventi",
    },
};

static SPANISH: LocaleProfile = LocaleProfile {
    tag: "es-ES",
    weekdays: [
        "Domingo",
        "Lunes",
        "Martes",
        "Miércoles",
        "Jueves",
        "Viernes",
        "Sábado",
    ],
    months: [
        "Enero",
        "Febrero",
        "Marzo",
        "Abril",
        "Mayo",
        "Junio",
        "Julio",
        "Agosto",
        "Septiembre",
        "Octubre",
        "Noviembre",
        "Diciembre",
    ],
    labels: Labels {
        title: "Calendario de Eventos",
        previous_month: "Mes anterior",
        next_month: "Mes siguiente",
        day_has_events: "Ver eventos del día",
        day_no_events: "Ningún evento",
        events_unavailable: "No se pudieron cargar los eventos",
    },
};

static FRENCH: LocaleProfile = LocaleProfile {
    tag: "fr-FR",
    weekdays: [
        "Dimanche",
        "Lundi",
        "Mardi",
        "Mercredi",
        "Jeudi",
        "Vendredi",
        "Samedi",
    ],
    months: [
        "Janvier",
        "Février",
        "Mars",
        "Avril",
        "Mai",
        "Juin",
        "Juillet",
        "Août",
        "Septembre",
        "Octobre",
        "Novembre",
        "Décembre",
    ],
    labels: Labels {
        title: "Calendrier des événements",
        previous_month: "Mois précédent",
        next_month: "Mois suivant",
        day_has_events: "Voir les événements du jour",
        day_no_events: "Aucun événement",
        events_unavailable: "Impossible de charger les événements",
    },
};

static GERMAN: LocaleProfile = LocaleProfile {
    tag: "de-DE",
    weekdays: [
        "Sonntag",
        "Montag",
        "Dienstag",
        "Mittwoch",
        "Donnerstag",
        "Freitag",
        "Samstag",
    ],
    months: [
        "Januar",
        "Februar",
        "März",
        "April",
        "Mai",
        "Juni",
        "Juli",
        "August",
        "September",
        "Oktober",
        "November",
        "Dezember",
    ],
    labels: Labels {
        title: "Veranstaltungskalender",
        previous_month: "Vorheriger Monat",
        next_month: "Nächster Monat",
        day_has_events: "Veranstaltungen des Tages anzeigen",
        day_no_events: "Keine Veranstaltung",
        events_unavailable: "Veranstaltungen konnten nicht geladen werden",
    },
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_supported_tags_resolve_exactly() {
        assert_eq!(Locale::resolve("it-IT"), Locale::Italian);
        assert_eq!(Locale::resolve("es-ES"), Locale::Spanish);
        assert_eq!(Locale::resolve("fr-FR"), Locale::French);
        assert_eq!(Locale::resolve("de-DE"), Locale::German);
    }

    #[test]
    fn test_environment_tags_are_normalized() {
        assert_eq!(Locale::resolve("it_IT.UTF-8"), Locale::Italian);
        assert_eq!(Locale::resolve("de_DE@euro"), Locale::German);
        assert_eq!(Locale::resolve("fr_FR"), Locale::French);
    }

    #[test]
    fn test_unsupported_tags_fall_back_to_english() {
        for raw in ["xx-XX", "en-GB", "it", "pt_BR.UTF-8", "", "C"] {
            let locale = Locale::resolve(raw);
            assert_eq!(locale, Locale::English, "{raw:?}");
            assert_eq!(locale.profile().labels, ENGLISH.labels);
        }
    }

    #[test]
    fn test_titles() {
        assert_eq!(
            Locale::French.profile().labels.title,
            "Calendrier des événements"
        );
        assert_eq!(Locale::resolve("xx-XX").profile().labels.title, "Events Calendar");
    }

    #[test]
    fn test_weekday_names_are_distinct_and_nonempty() {
        for locale in Locale::ALL {
            let profile = locale.profile();
            let names = ALL_WEEKDAYS
                .into_iter()
                .map(|wd| profile.weekday_name(wd))
                .collect::<HashSet<_>>();
            assert_eq!(names.len(), 7, "{}", profile.tag);
            assert!(names.iter().all(|name| !name.is_empty()), "{}", profile.tag);
        }
    }

    #[test]
    fn test_month_names_are_distinct_and_nonempty() {
        for locale in Locale::ALL {
            let profile = locale.profile();
            let names = (1..=12)
                .map(|m| profile.month_name(Month::try_from(m).unwrap()))
                .collect::<HashSet<_>>();
            assert_eq!(names.len(), 12, "{}", profile.tag);
            assert!(names.iter().all(|name| !name.is_empty()), "{}", profile.tag);
        }
    }

    #[test]
    fn test_weekday_names_follow_the_calendar() {
        let profile = Locale::Italian.profile();
        assert_eq!(profile.weekday_name(Weekday::Sunday), "Domenica");
        assert_eq!(profile.weekday_name(Weekday::Monday), "Lunedì");
        assert_eq!(profile.weekday_name(Weekday::Saturday), "Sabato");
    }

    const ALL_WEEKDAYS: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];
}
