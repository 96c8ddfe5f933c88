//! Static radio channel catalog backing the radio screens.

use shared::RadioChannel;

/// Channels shown on the radio home screen, in display order.
pub fn radio_channels() -> Vec<RadioChannel> {
    vec![
        channel(
            "harmony",
            "Harmony",
            "Explore the epic tale of Ramayana through engaging lessons and activities.",
        ),
        channel(
            "eq",
            "EQ",
            "Explore the epic tale of Ramayana through engaging lessons and activities.",
        ),
    ]
}

/// Look up a channel by its route id.
pub fn find_channel(id: &str) -> Option<RadioChannel> {
    radio_channels().into_iter().find(|c| c.id == id)
}

fn channel(id: &str, title: &str, subtitle: &str) -> RadioChannel {
    RadioChannel {
        id: id.to_string(),
        title: title.to_string(),
        subtitle: subtitle.to_string(),
    }
}
