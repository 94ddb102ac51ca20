//! Built-in squad, fixture list and news items.

use crate::fixtures::{Fixture, Venue};
use crate::news::NewsItem;
use crate::players::{AgeRange, Agent, PlayerRecord, PlayerStats};

#[allow(clippy::too_many_arguments)]
fn player(
    id: &str,
    name: &str,
    nickname: &str,
    position: &str,
    club: &str,
    dob: &str,
    jersey_number: u32,
    age_range: AgeRange,
    image: &str,
    bio: &str,
    stats: [u32; 5],
    agent: (&str, &str, &str),
) -> PlayerRecord {
    let [appearances, goals, assists, yellow_cards, red_cards] = stats;
    PlayerRecord {
        id: id.into(),
        name: name.to_string(),
        nickname: nickname.to_string(),
        position: position.to_string(),
        club: club.to_string(),
        dob: dob.to_string(),
        jersey_number,
        age_range,
        image: image.to_string(),
        bio: bio.to_string(),
        stats: PlayerStats {
            appearances,
            goals,
            assists,
            yellow_cards,
            red_cards,
        },
        agent: Some(Agent {
            name: agent.0.to_string(),
            phone: agent.1.to_string(),
            email: agent.2.to_string(),
        }),
    }
}

pub(crate) fn players() -> Vec<PlayerRecord> {
    vec![
        player(
            "musa-tombo",
            "Musa Tombo",
            "The Wizard",
            "Midfielder",
            "East End Lions",
            "15 March 2000",
            10,
            AgeRange::TwentyOneToTwentyFive,
            "./images/musa tombo.jpg",
            "Musa Tombo is one of Sierra Leone's most exciting midfield talents, known for his \
             exceptional vision, passing range, and spectacular long-range goals. Rising through \
             the youth ranks of East End Lions, he quickly established himself as a starter for \
             the national team, becoming a fan favorite. His career trajectory is set for \
             international leagues, and he remains a central figure in SLFA's strategy for the \
             upcoming AFCON and World Cup qualifiers.",
            [32, 14, 9, 5, 1],
            ("Alpha Saidu", "+232 76 123 456", "alpha.agent@slfa.com"),
        ),
        player(
            "mohamed-kamara",
            "Mohamed Kamara",
            "The Hunter",
            "Attacker",
            "Mighty Blackpool",
            "28 July 2004",
            9,
            AgeRange::EighteenToTwenty,
            "./images/mohamed kamara.jpg",
            "A rapid and agile forward, Mohamed Kamara brings relentless pressure and a clinical \
             finish to the attacking third. Despite his youth, he has shown maturity beyond his \
             years, leading the line for both Mighty Blackpool and the national side. He is \
             viewed as the future of Sierra Leonean attacking football, possessing a natural \
             ability to find space and convert chances.",
            [25, 18, 4, 2, 0],
            ("Isata Sorie", "+232 78 987 654", "isata.sorie@slfa.com"),
        ),
        player(
            "alhaji-kamara",
            "Alhaji Kamara",
            "The Wall",
            "Goal Keeper",
            "Kamboi Eagles",
            "05 December 1993",
            1,
            AgeRange::ThirtyOnePlus,
            "./images/Alhaji kamara.jpg",
            "Alhaji Kamara is a veteran goalkeeper whose experience and leadership are \
             invaluable to the squad. Known for his commanding presence in the box and excellent \
             shot-stopping abilities, he anchors the defense. His long career has seen him \
             through many national campaigns, making him a mentor to the younger players and a \
             reliable last line of defense.",
            [40, 0, 1, 3, 0],
            ("Amadu Mansaray", "+232 77 112 233", "amadu.m@slfa.com"),
        ),
        player(
            "umaru-bangura",
            "Umaru Bangura",
            "The Rock",
            "Defender",
            "Bo Rangers",
            "07 October 1998",
            5,
            AgeRange::TwentySixToThirty,
            "./images/Umaru-Bangura.jpeg",
            "Umaru Bangura is a strong, composed central defender. His ability to read the game, \
             intercept passes, and command the back four makes him an essential part of the \
             Sierra Leone defense. He is known for his professionalism and consistency, rarely \
             making errors and often contributing crucial tackles and blocks in high-pressure \
             situations.",
            [35, 2, 3, 8, 0],
            ("Fatmata Davies", "+232 75 445 566", "fat.davies@slfa.com"),
        ),
    ]
}

fn fixture(
    date: &str,
    opponent: &str,
    competition: &str,
    venue: Venue,
    result: Option<&str>,
) -> Fixture {
    Fixture {
        date: date.to_string(),
        opponent: opponent.to_string(),
        competition: competition.to_string(),
        venue,
        result: result.map(str::to_string),
    }
}

pub(crate) fn fixtures() -> Vec<Fixture> {
    use Venue::*;
    vec![
        fixture("22 Dec 2024", "Bhantal FC", "League", Home, Some("D 0-0")),
        fixture("04 Jan 2025", "Bo Rangers", "League", Away, Some("L 1-3")),
        fixture("10 Jan 2025", "East End Lions", "League", Home, Some("W 2-1")),
        fixture("25 Jan 2025", "FC Kallon", "League", Away, None),
        fixture("08 Feb 2025", "Mighty Blackpool", "League", Home, None),
        fixture("15 Feb 2025", "Kamboi Eagles", "Cup Quarter-Final", Away, None),
        fixture("01 Mar 2025", "Wusum Stars", "League", Home, None),
        fixture("15 Mar 2025", "Diamond Stars", "League", Away, None),
        fixture("29 Mar 2025", "Old Edwardians", "League", Home, None),
    ]
}

pub(crate) fn news() -> Vec<NewsItem> {
    vec![
        NewsItem {
            id: "afcon-qualify".to_string(),
            title: "Leone Stars Qualify for AFCON 2026!".to_string(),
            date: "10 December 2025".to_string(),
            image: "./images/Recent Progress.jpg".to_string(),
            body: "In an historic night at the National Stadium, the Leone Stars secured their \
                   place in the African Cup of Nations (AFCON) 2026 tournament with a thrilling \
                   2-1 victory over their rivals. The decisive goal came in the 90th minute from \
                   Captain Steven Caulker, sparking scenes of pure jubilation across the capital. \
                   This qualification marks a significant milestone for the SLFA's five-year \
                   development plan, demonstrating the immense progress made in national team \
                   cohesion and training infrastructure. The team is now looking forward to the \
                   draw and beginning their intensive preparations for the continental \
                   challenge. The nation stands united behind our team!"
                .to_string(),
        },
        NewsItem {
            id: "youth-academy".to_string(),
            title: "SLFA Youth Academy Signs 10 New Talents".to_string(),
            date: "05 December 2025".to_string(),
            image: "./images/Future Plans.jpg".to_string(),
            body: "The future of Sierra Leonean football looks bright following the official \
                   signing of ten promising young athletes into the SLFA Youth Academy. This \
                   induction represents the largest single intake of talent in half a decade, \
                   reinforcing the association's commitment to grassroots development. The new \
                   recruits, aged between 15 and 17, will benefit from a world-class training \
                   regime, educational support, and professional coaching designed to transition \
                   them directly into professional football. SLFA President, Ishmael Koroma, \
                   stated that this investment is crucial for sustained success on the \
                   international stage."
                .to_string(),
        },
        NewsItem {
            id: "stadium-update".to_string(),
            title: "New Stadium Development Update".to_string(),
            date: "28 November 2025".to_string(),
            image: "./images/construct-stadium.jpg".to_string(),
            body: "Progress on the state-of-the-art National Stadium continues to move at an \
                   impressive pace. This week marked the successful completion and official \
                   laying of the foundation stone for the main grandstand. The new facility, \
                   designed to meet FIFA standards, will boast a capacity of 50,000 seats and \
                   include modern amenities for players, media, and fans. The project is \
                   currently projected to be completed in the third quarter of 2026. The SLFA \
                   anticipates that the new stadium will not only provide a superior home ground \
                   for the Leone Stars but also act as a major catalyst for hosting international \
                   tournaments."
                .to_string(),
        },
    ]
}
