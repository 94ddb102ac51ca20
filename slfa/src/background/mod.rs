pub mod loader;

use std::collections::HashMap;
use std::future::Future;
use tokio::task::JoinHandle;

/// Manages background tasks for roster loading and file exports
/// Tracks running tasks by id and provides cancellation support
pub struct BackgroundTaskManager {
    tasks: HashMap<String, JoinHandle<()>>,
}

impl BackgroundTaskManager {
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
        }
    }

    /// Spawn a background task
    /// If a task with the same ID already exists, it will be cancelled first
    pub fn spawn_load_task<F>(&mut self, task_id: String, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        // Cancel existing task with same ID (prevents stale data)
        if let Some(handle) = self.tasks.remove(&task_id) {
            handle.abort();
        }

        tracing::debug!("Spawning background task {}", task_id);
        let handle = tokio::spawn(future);
        self.tasks.insert(task_id, handle);
    }

    /// Forget handles of tasks that already ran to completion
    pub fn reap_finished(&mut self) {
        self.tasks.retain(|_, handle| !handle.is_finished());
    }

    pub fn running(&self) -> usize {
        self.tasks.len()
    }

    /// Cancel all running tasks (used on shutdown)
    pub fn cancel_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

impl Default for BackgroundTaskManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for BackgroundTaskManager {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_same_id_replaces_running_task() {
        let mut manager = BackgroundTaskManager::new();
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

        let slow_tx = tx.clone();
        manager.spawn_load_task("load_roster".to_string(), async move {
            tokio::time::sleep(Duration::from_secs(60)).await;
            let _ = slow_tx.send("stale");
        });
        manager.spawn_load_task("load_roster".to_string(), async move {
            let _ = tx.send("fresh");
        });

        assert_eq!(manager.running(), 1);
        assert_eq!(rx.recv().await, Some("fresh"));
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn test_reap_finished() {
        let mut manager = BackgroundTaskManager::new();
        manager.spawn_load_task("export".to_string(), async {});
        tokio::time::sleep(Duration::from_millis(50)).await;

        manager.reap_finished();
        assert_eq!(manager.running(), 0);
    }
}
