use log::info;

use wippi_app::services::orders;
use wippi_app::services::profile_api::MockProfileApi;
use wippi_app::services::radio;
use wippi_app::ui::forms::profile_form::ProfileFormController;
use wippi_app::ui::AppState;

/// Headless smoke run: wire logging, hydrate the stores from the mocked
/// services, and walk the profile screen's happy path once.
fn main() {
    env_logger::init();
    info!("Starting Wippi presentation core");

    let mut state = AppState::new();

    let api = MockProfileApi::new();
    match api.fetch_profile() {
        Some(profile) => {
            info!("Fetched existing profile for {}", profile.name);
            state.profile.create_profile(profile);
        }
        None => info!("First-time user, profile setup pending"),
    }

    let form = ProfileFormController::open(&mut state.profile);
    info!(
        "Profile screen opened in {:?} mode (dirty={})",
        state.profile.mode,
        form.is_dirty()
    );

    info!("Order history entries: {}", orders::list_orders().len());
    info!("Radio channels: {}", radio::radio_channels().len());
}
