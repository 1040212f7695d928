use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Quiet period used when none is configured.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(500);

enum Command<T> {
    Value(T),
    Cancel,
}

/// Delays values until the input has been quiet for a fixed period.
///
/// Each [`push`](Debouncer::push) restarts the timer and replaces the pending
/// value, so only the last value of a burst reaches the output receiver.
/// Dropping the debouncer stops its timer task; a pending value is then
/// discarded and the output receiver yields `None`.
pub struct Debouncer<T> {
    input: mpsc::UnboundedSender<Command<T>>,
    task: JoinHandle<()>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Spawn the timer task on the current tokio runtime.
    pub fn new(quiet_period: Duration) -> (Self, mpsc::UnboundedReceiver<T>) {
        let (input, commands) = mpsc::unbounded_channel();
        let (output, receiver) = mpsc::unbounded_channel();
        let task = tokio::spawn(run(quiet_period, commands, output));
        (Self { input, task }, receiver)
    }

    pub fn push(&self, value: T) {
        // Send only fails once the task is gone, i.e. after teardown.
        let _ = self.input.send(Command::Value(value));
    }

    /// Drop the pending value, if any, without emitting it.
    pub fn cancel(&self) {
        let _ = self.input.send(Command::Cancel);
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run<T>(
    quiet_period: Duration,
    mut commands: mpsc::UnboundedReceiver<Command<T>>,
    output: mpsc::UnboundedSender<T>,
) {
    let mut pending: Option<T> = None;

    loop {
        let Some(value) = pending.take() else {
            match commands.recv().await {
                Some(Command::Value(value)) => pending = Some(value),
                Some(Command::Cancel) => {}
                None => return,
            }
            continue;
        };

        tokio::select! {
            command = commands.recv() => match command {
                Some(Command::Value(newer)) => pending = Some(newer),
                Some(Command::Cancel) => {}
                None => return,
            },
            _ = tokio::time::sleep(quiet_period) => {
                if output.send(value).is_err() {
                    return;
                }
            }
        }
    }
}
