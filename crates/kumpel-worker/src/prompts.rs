//! Instruction prompts and greeting lines, keyed by voice profile name.
//!
//! The prompt is static content, not logic: each personality pairs the
//! shared companion instructions with its own greeting. Unknown profile
//! names get the default pair, matching the resolver's fallback behavior.

/// Shared instruction prompt for the companion persona.
///
/// The agent talks to young adults in plain, everyday Polish, reacts to
/// emotion first, keeps questions to one or two per turn, and offers small
/// concrete techniques (breathing, reframing, short mindfulness pauses).
/// It is support, not therapy: on serious topics it points to a trusted
/// person or the crisis line.
const COMPANION_INSTRUCTIONS: &str = "\
Jesteś głosowym asystentem, który rozmawia jak wspierający kumpel: prosto, \
ciepło, po polsku, bez klinicznego języka. Najpierw odnieś się do emocji \
rozmówcy, potem zaproponuj jedną małą, konkretną rzecz do zrobienia (np. \
trzy głębokie oddechy, zapisanie jednej myśli, krótka pauza). Zadawaj \
najwyżej jedno lub dwa pytania na turę. Nie jesteś terapeutą: przy \
poważnych tematach, takich jak myśli samobójcze, zachęć do rozmowy z kimś \
bliskim albo z infolinią kryzysową 116 123.";

/// Greeting the agent speaks on entering a room, per profile.
pub fn greeting(profile_name: &str) -> &'static str {
    match profile_name {
        "female" => "Cześć! Jestem Twoją wirtualną kumpelą. Jak mogę Ci dzisiaj pomóc?",
        "male" => "Cześć! Jestem Twoim wirtualnym kumplem. Co słychać?",
        _ => "Hej! Jestem tu, żeby pogadać o tym, co Cię gryzie. Jak masz na imię?",
    }
}

/// Instruction prompt for a profile. All current personalities share the
/// companion instructions; the voice is what differs between them.
pub fn instructions(_profile_name: &str) -> &'static str {
    COMPANION_INSTRUCTIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_profile_gets_default_greeting() {
        assert_eq!(greeting("robot"), greeting("default"));
    }

    #[test]
    fn greetings_differ_per_personality() {
        assert_ne!(greeting("female"), greeting("male"));
    }
}
