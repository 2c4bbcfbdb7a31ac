//! Given steps for pomodoro timer BDD scenarios.

use super::world::PomodoroWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("a fresh pomodoro timer")]
fn fresh_timer(world: &mut PomodoroWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(!world.snapshot().is_running(), "new timer should be stopped");
    Ok(())
}

#[given(r#"the timer is running in the "{phase}" phase"#)]
fn timer_running(world: &mut PomodoroWorld, phase: String) -> Result<(), eyre::Report> {
    world
        .engine
        .start(Some(&phase))
        .wrap_err("start timer in scenario setup")?;
    Ok(())
}
