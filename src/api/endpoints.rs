// URL builders for the two StatLocker endpoints this tool talks to.

pub fn profile_url(base_url: &str, steam_id: u64) -> String {
    format!("{}/profile/steam-profile/{}", base_url, steam_id)
}

pub fn match_history_url(base_url: &str, steam_id: u64, game_mode: u32) -> String {
    format!(
        "{}/profile/data/matches/{}/true?gameMode={}",
        base_url, steam_id, game_mode
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_profile_url() {
        assert_eq!(
            profile_url("https://statlocker.gg/api", 76561198000000001),
            "https://statlocker.gg/api/profile/steam-profile/76561198000000001"
        );
    }

    #[test]
    fn builds_match_history_url_with_game_mode() {
        assert_eq!(
            match_history_url("https://statlocker.gg/api", 42, 1),
            "https://statlocker.gg/api/profile/data/matches/42/true?gameMode=1"
        );
    }
}
