//! Tokio runtime inside Bevy, plus a `TaskSpawner` system parameter.
//!
//! Network requests (reqwest) need a Tokio runtime; `bevy_tokio_tasks`
//! provides one. Results travel back to the ECS over `async_channel`.

use std::future::Future;

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

/// Plugin that sets up the Tokio runtime.
pub struct AsyncRuntimePlugin;

impl Plugin for AsyncRuntimePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(bevy_tokio_tasks::TokioTasksPlugin::default());
    }
}

/// A system parameter for spawning async tasks.
///
/// The runtime is optional so headless apps without [`AsyncRuntimePlugin`]
/// can still run systems that would spawn tasks; callers check
/// [`TaskSpawner::is_available`] and take their offline path.
#[derive(SystemParam)]
pub struct TaskSpawner<'w> {
    runtime: Option<Res<'w, bevy_tokio_tasks::TokioTasksRuntime>>,
}

impl TaskSpawner<'_> {
    pub fn is_available(&self) -> bool {
        self.runtime.is_some()
    }

    /// Spawn a background task that runs to completion.
    ///
    /// Returns `false` if no runtime is installed and the future was dropped.
    /// For tasks that need to return values, use channels to communicate
    /// results back to the main thread.
    pub fn spawn<F>(&self, future: F) -> bool
    where
        F: Future<Output = ()> + Send + 'static,
    {
        match &self.runtime {
            Some(runtime) => {
                runtime.spawn_background_task(move |_ctx| future);
                true
            }
            None => false,
        }
    }
}
