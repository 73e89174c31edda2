//! Pure scoring of a six-die roll.
//!
//! Every function here is total: rolls shorter or longer than six dice and
//! faces outside 1..=6 never panic, they just contribute nothing. That
//! leniency lets upstream code render partial previews; results for
//! straight/house/villa/tower categories are only meaningful on a complete
//! roll.
//!
//! Tie-breaks follow the standard Scandinavian convention: pair and
//! n-of-a-kind families scan faces from highest to lowest, so the highest
//! qualifying face wins regardless of how often lower faces appear.

use enum_map::{enum_map, EnumMap};

use super::category::Category;

/// The full potential-score table: one entry per category, computed
/// independently from the same roll.
pub type PotentialScores = EnumMap<Category, u32>;

/// Count occurrences of each face, indexable by face value (1..=6).
///
/// Faces outside 1..=6 are dropped here, which is what makes every scoring
/// rule total.
fn face_counts(dice: &[u8]) -> [u8; 7] {
    let mut counts = [0u8; 7];
    for &die in dice {
        if (1..=6).contains(&die) {
            counts[die as usize] += 1;
        }
    }
    counts
}

/// Sum of all counted dice.
fn sum_all(counts: &[u8; 7]) -> u32 {
    (1..=6).map(|f| f as u32 * counts[f] as u32).sum()
}

/// Highest face appearing at least `n` times, scored as face x n.
fn n_of_a_kind(counts: &[u8; 7], n: u8) -> u32 {
    for face in (1..=6).rev() {
        if counts[face] >= n {
            return face as u32 * n as u32;
        }
    }
    0
}

/// Two distinct faces each appearing at least twice, highest two scored.
///
/// A single face appearing four times does not qualify on its own.
fn two_pairs(counts: &[u8; 7]) -> u32 {
    let mut found = 0u32;
    let mut pairs = 0;
    for face in (1..=6).rev() {
        if counts[face] >= 2 {
            found += 2 * face as u32;
            pairs += 1;
            if pairs == 2 {
                return found;
            }
        }
    }
    0
}

/// All six dice partition into three pairs of three distinct faces.
///
/// A face appearing four or six times does not pair with itself, so e.g.
/// `[4,4,4,4,5,5]` scores 0 here.
fn three_pairs(counts: &[u8; 7]) -> u32 {
    let paired_faces = (1..=6).filter(|&f| counts[f] == 2).count();
    let dice_counted: u8 = counts.iter().sum();
    if paired_faces == 3 && dice_counted == 6 {
        sum_all(counts)
    } else {
        0
    }
}

/// Fixed-value straight: every face in `faces` present at least once.
fn straight(counts: &[u8; 7], faces: std::ops::RangeInclusive<usize>, score: u32) -> u32 {
    if faces.into_iter().all(|f| counts[f] >= 1) {
        score
    } else {
        0
    }
}

/// Highest triple T plus highest pair P, scored 3T + 2P.
///
/// P may equal T only when T appears at least five times; five dice are
/// scored, the sixth contributes nothing even when all six share a face.
fn full_house(counts: &[u8; 7]) -> u32 {
    for triple in (1..=6).rev() {
        if counts[triple] < 3 {
            continue;
        }
        for pair in (1..=6).rev() {
            let qualifies = if pair == triple {
                counts[triple] >= 5
            } else {
                counts[pair] >= 2
            };
            if qualifies {
                return 3 * triple as u32 + 2 * pair as u32;
            }
        }
    }
    0
}

/// Exactly two distinct faces each appearing at least three times: two
/// triples consuming all six dice, scored as their sum.
fn villa(counts: &[u8; 7]) -> u32 {
    let triple_faces = (1..=6).filter(|&f| counts[f] >= 3).count();
    if triple_faces == 2 {
        sum_all(counts)
    } else {
        0
    }
}

/// A face appearing at least four times plus a different face appearing at
/// least twice, scored as the sum of all six dice.
fn tower(counts: &[u8; 7]) -> u32 {
    for quad in (1..=6).rev() {
        if counts[quad] < 4 {
            continue;
        }
        if (1..=6).any(|f| f != quad && counts[f] >= 2) {
            return sum_all(counts);
        }
    }
    0
}

/// All six dice share one face.
fn maxi_yatzy(counts: &[u8; 7]) -> u32 {
    if (1..=6).any(|f| counts[f] == 6) {
        100
    } else {
        0
    }
}

/// Compute the potential score of one category for the given roll.
#[must_use]
pub fn score_category(dice: &[u8], category: Category) -> u32 {
    let counts = face_counts(dice);

    match category {
        Category::Ones
        | Category::Twos
        | Category::Threes
        | Category::Fours
        | Category::Fives
        | Category::Sixes => {
            // face_value is Some for every upper-section category.
            let face = category.face_value().unwrap_or(0) as usize;
            face as u32 * counts[face] as u32
        }
        Category::OnePair => n_of_a_kind(&counts, 2),
        Category::TwoPairs => two_pairs(&counts),
        Category::ThreePairs => three_pairs(&counts),
        Category::ThreeOfAKind => n_of_a_kind(&counts, 3),
        Category::FourOfAKind => n_of_a_kind(&counts, 4),
        Category::FiveOfAKind => n_of_a_kind(&counts, 5),
        Category::SmallStraight => straight(&counts, 1..=5, 15),
        Category::LargeStraight => straight(&counts, 2..=6, 20),
        Category::FullStraight => straight(&counts, 1..=6, 21),
        Category::FullHouse => full_house(&counts),
        Category::Villa => villa(&counts),
        Category::Tower => tower(&counts),
        Category::Chance => sum_all(&counts),
        Category::MaxiYatzy => maxi_yatzy(&counts),
    }
}

/// Compute all twenty potential scores from the same roll.
///
/// No category selection mutates or consumes the roll; a player sees the
/// whole table at once and picks one entry. Filled-category exclusion is
/// the game state machine's job, not the engine's.
#[must_use]
pub fn potential_scores(dice: &[u8]) -> PotentialScores {
    enum_map! {
        category => score_category(dice, category),
    }
}
