//! Plain-text rendering of hero pages and hero details for the CLI

use crate::models::{Hero, HeroPage};

/// Qualitative label for a 0-100 power statistic
pub fn stat_level(value: u32) -> &'static str {
    if value >= 90 {
        "Legendary"
    } else if value >= 70 {
        "Excellent"
    } else if value >= 50 {
        "Good"
    } else if value >= 30 {
        "Average"
    } else if value >= 10 {
        "Low"
    } else {
        "Very Low"
    }
}

fn or_unknown(value: &Option<String>) -> &str {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or("Unknown")
}

/// Render one page of heroes with a pagination footer
pub fn format_hero_page(page: &HeroPage) -> String {
    let mut output = String::new();

    for hero in &page.items {
        let publisher = or_unknown(&hero.biography.publisher);
        output.push_str(&format!("{:>5}  {}  ({})\n", hero.id, hero.name, publisher));
    }

    output.push_str(&format!(
        "\nPage {} of {} - showing {}-{} of {} heroes\n",
        page.page,
        page.total_pages(),
        page.start_index,
        page.end_index,
        page.length
    ));

    output
}

/// Render a full hero detail card: power stats with qualitative levels,
/// then biography, appearance, work and connections sections
pub fn format_hero_detail(hero: &Hero) -> String {
    let mut output = String::new();

    output.push_str(&format!("{} (#{})\n\n", hero.name, hero.id));

    output.push_str("Power Stats\n");
    let stats = [
        ("Intelligence", hero.powerstats.intelligence),
        ("Strength", hero.powerstats.strength),
        ("Speed", hero.powerstats.speed),
        ("Durability", hero.powerstats.durability),
        ("Power", hero.powerstats.power),
        ("Combat", hero.powerstats.combat),
    ];
    for (name, value) in stats {
        output.push_str(&format!(
            "    {:<13} {:>3}  {}\n",
            name,
            value,
            stat_level(value)
        ));
    }

    output.push_str("\nBiography\n");
    output.push_str(&format!(
        "    Full name:        {}\n",
        or_unknown(&hero.biography.full_name)
    ));
    output.push_str(&format!(
        "    Place of birth:   {}\n",
        or_unknown(&hero.biography.place_of_birth)
    ));
    output.push_str(&format!(
        "    First appearance: {}\n",
        or_unknown(&hero.biography.first_appearance)
    ));
    output.push_str(&format!(
        "    Publisher:        {}\n",
        or_unknown(&hero.biography.publisher)
    ));
    output.push_str(&format!(
        "    Alter egos:       {}\n",
        or_unknown(&hero.biography.alter_egos)
    ));
    if !hero.biography.aliases.is_empty() {
        output.push_str(&format!(
            "    Aliases:          {}\n",
            hero.biography.aliases.join(", ")
        ));
    }

    output.push_str("\nAppearance\n");
    output.push_str(&format!(
        "    Gender:     {}\n",
        or_unknown(&hero.appearance.gender)
    ));
    output.push_str(&format!(
        "    Race:       {}\n",
        or_unknown(&hero.appearance.race)
    ));
    if !hero.appearance.height.is_empty() {
        output.push_str(&format!(
            "    Height:     {}\n",
            hero.appearance.height.join(" / ")
        ));
    }
    if !hero.appearance.weight.is_empty() {
        output.push_str(&format!(
            "    Weight:     {}\n",
            hero.appearance.weight.join(" / ")
        ));
    }
    output.push_str(&format!(
        "    Eye color:  {}\n",
        or_unknown(&hero.appearance.eye_color)
    ));
    output.push_str(&format!(
        "    Hair color: {}\n",
        or_unknown(&hero.appearance.hair_color)
    ));

    output.push_str("\nWork\n");
    output.push_str(&format!(
        "    Occupation: {}\n",
        or_unknown(&hero.work.occupation)
    ));
    output.push_str(&format!("    Base:       {}\n", or_unknown(&hero.work.base)));

    output.push_str("\nConnections\n");
    output.push_str(&format!(
        "    Group affiliation: {}\n",
        or_unknown(&hero.connections.group_affiliation)
    ));
    output.push_str(&format!(
        "    Relatives:         {}\n",
        or_unknown(&hero.connections.relatives)
    ));

    output
}
