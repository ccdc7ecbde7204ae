//! Static persona roster backing the `characters` command.

#[derive(Debug, Clone, Copy)]
pub struct Character {
    pub id: &'static str,
    pub name: &'static str,
    pub series: &'static str,
    pub traits: &'static [&'static str],
    pub energy: &'static str,
    pub music_vibe: &'static str,
    pub description: &'static str,
}

pub const ROSTER: &[Character] = &[
    Character {
        id: "kaiser",
        name: "Kaiser",
        series: "Blue Lock",
        traits: &["Dominant", "Ambitious", "Strategic", "Ruthless"],
        energy: "Commanding & Intense",
        music_vibe: "Power anthems, orchestral epics, aggressive hip-hop",
        description: "The emperor who demands perfection. Music that makes you feel unstoppable.",
    },
    Character {
        id: "gojo",
        name: "Gojo Satoru",
        series: "Jujutsu Kaisen",
        traits: &["Playful", "Chaotic", "Confident", "Unpredictable"],
        energy: "Electric & Carefree",
        music_vibe: "High-energy drops, chaotic beats, euphoric vibes",
        description: "The strongest who plays by his own rules. Music that hits different.",
    },
    Character {
        id: "nanami",
        name: "Nanami Kento",
        series: "Jujutsu Kaisen",
        traits: &["Disciplined", "Mature", "Calm", "Refined"],
        energy: "Steady & Sophisticated",
        music_vibe: "Clean production, jazzy undertones, smooth grooves",
        description: "The professional who values quality. Music for focused minds.",
    },
];

pub fn find(id: &str) -> Option<&'static Character> {
    ROSTER.iter().find(|character| character.id == id)
}
