//! What the pet says, based on how it's doing

use rand::Rng;

use super::state::Pet;
use super::stats::PetStats;

/// Overall mood band from the average stat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    VeryHappy,
    Happy,
    Neutral,
    Sad,
    VerySad,
}

pub fn overall_mood(stats: &PetStats) -> Mood {
    let avg = stats.average();
    if avg >= 80.0 {
        Mood::VeryHappy
    } else if avg >= 60.0 {
        Mood::Happy
    } else if avg >= 40.0 {
        Mood::Neutral
    } else if avg >= 20.0 {
        Mood::Sad
    } else {
        Mood::VerySad
    }
}

/// Line templates per mood; `{name}` is replaced with the pet's name
fn lines(mood: Mood) -> &'static [&'static str] {
    match mood {
        Mood::VeryHappy => &[":D", "I love you"],
        Mood::Happy => &["{name} is feeling good!", ":)", "meow!"],
        Mood::Neutral => &[
            "{name} is okay.",
            "{name} seems calm",
            "{name} is alright.",
        ],
        Mood::Sad => &["{name} looks a bit down...", "{name} wants attention."],
        Mood::VerySad => &[":(", "{name} feels neglected", "{name} is sad"],
    }
}

/// Pick a line for the stats' mood band, uniformly at random
pub fn band_line<R: Rng>(stats: &PetStats, name: &str, rng: &mut R) -> String {
    let options = lines(overall_mood(stats));
    let line = options[rng.random_range(0..options.len())];
    line.replace("{name}", name)
}

/// Dialogue for a pet. Adopted pets always get the adoption line.
pub fn pet_dialogue<R: Rng>(pet: &Pet, rng: &mut R) -> String {
    if pet.is_adopted {
        return format!("{} is your beloved adopted pet!", pet.name);
    }
    band_line(&pet.stats, &pet.name, rng)
}
