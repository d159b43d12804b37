use serde::Serialize;

/// A daily quiz game scores can be logged for.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Game {
    pub name: &'static str,
    pub url: &'static str,
    pub description: &'static str,
}

pub const QUIZ_GAMES: &[Game] = &[
    Game {
        name: "Wordle",
        url: "https://www.nytimes.com/games/wordle/index.html",
        description: "Guess the five-letter word in six tries",
    },
    Game {
        name: "Wørdle",
        url: "https://xn--wrdle-vua.dk/",
        description: "Danish version of Wordle",
    },
    Game {
        name: "Worldle",
        url: "https://worldle.teuteuf.fr/",
        description: "Guess the country by its shape",
    },
    Game {
        name: "Travle",
        url: "https://travle.earth/",
        description: "Travel between countries in the fewest steps",
    },
    Game {
        name: "Bandle",
        url: "https://bandle.app/daily",
        description: "Guess the song from progressively longer clips",
    },
    Game {
        name: "Actorle",
        url: "https://actorle.com/",
        description: "Guess the actor from their movies",
    },
];

/// Exact, case-sensitive lookup in the game catalog.
pub fn find_game(name: &str) -> Option<&'static Game> {
    QUIZ_GAMES.iter().find(|game| game.name == name)
}
