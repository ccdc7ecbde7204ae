use tabled::Table;

use crate::{characters::ROSTER, info, types::CharacterTableRow};

/// Prints the persona roster the demo offers.
pub fn characters() {
    let rows: Vec<CharacterTableRow> = ROSTER
        .iter()
        .map(|character| CharacterTableRow {
            id: character.id.to_string(),
            name: character.name.to_string(),
            series: character.series.to_string(),
            vibe: character.music_vibe.to_string(),
        })
        .collect();
    println!("{}", Table::new(rows));

    info!("Run `vibematch recommend --character <id>` for a tuned mix.");
}
