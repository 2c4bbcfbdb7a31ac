//! When steps for pomodoro timer BDD scenarios.

use super::world::PomodoroWorld;
use chrono::TimeDelta;
use eyre::WrapErr;
use focus_widget::pomodoro::domain::PomodoroSettings;
use rstest_bdd_macros::when;

#[when("the timer is started without a phase")]
fn start_without_phase(world: &mut PomodoroWorld) -> Result<(), eyre::Report> {
    world.engine.start(None).wrap_err("start timer")?;
    Ok(())
}

#[when(r#"the timer is started in the "{phase}" phase"#)]
fn start_in_phase(world: &mut PomodoroWorld, phase: String) {
    world.last_start_error = world.engine.start(Some(&phase)).err();
}

#[when("the timer is stopped")]
fn stop_timer(world: &mut PomodoroWorld) {
    let _stopped = world.engine.stop();
}

#[when("{seconds:i64} seconds pass")]
fn seconds_pass(world: &mut PomodoroWorld, seconds: i64) {
    world.clock.advance(TimeDelta::seconds(seconds));
}

#[when("the work duration is changed to {minutes:i64} minutes")]
fn change_work_duration(world: &mut PomodoroWorld, minutes: i64) -> Result<(), eyre::Report> {
    let current = *world.snapshot().settings();
    let settings = PomodoroSettings::new(
        minutes,
        i64::from(current.short_break_minutes()),
        i64::from(current.long_break_minutes()),
    )
    .wrap_err("build scenario settings")?;
    let _updated = world.engine.update_settings(settings);
    Ok(())
}
