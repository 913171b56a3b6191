use hpfold::engine::progress::{Progress, ProgressReporter};
use indicatif::ProgressBar;
use std::sync::Mutex;
use std::time::Duration;

/// Builds a reporter that drives an indicatif spinner from the core's
/// progress events. A quiet session gets the silent default reporter.
pub fn reporter(quiet: bool) -> ProgressReporter<'static> {
    if quiet {
        return ProgressReporter::new();
    }

    let spinner: Mutex<Option<ProgressBar>> = Mutex::new(None);
    ProgressReporter::with_callback(Box::new(move |event| {
        let Ok(mut slot) = spinner.lock() else {
            return;
        };
        match event {
            Progress::PhaseStart { name } => {
                let bar = ProgressBar::new_spinner();
                bar.set_message(name);
                bar.enable_steady_tick(Duration::from_millis(120));
                *slot = Some(bar);
            }
            Progress::StatusUpdate { text } => {
                if let Some(bar) = slot.as_ref() {
                    bar.set_message(text);
                }
            }
            Progress::Message(text) => match slot.as_ref() {
                Some(bar) => bar.println(text),
                None => println!("{text}"),
            },
            Progress::PhaseFinish => {
                if let Some(bar) = slot.take() {
                    bar.finish_and_clear();
                }
            }
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_reporter_swallows_events() {
        let reporter = reporter(true);
        reporter.report(Progress::PhaseStart { name: "Search" });
        reporter.report(Progress::PhaseFinish);
    }

    #[test]
    fn events_without_a_phase_do_not_panic() {
        let reporter = reporter(false);
        reporter.report(Progress::StatusUpdate {
            text: "orphan".to_string(),
        });
        reporter.report(Progress::PhaseFinish);
    }
}
