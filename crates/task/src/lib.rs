//! Async call helper.
//!
//! [`AsyncTask`] wraps a fallible async function together with its input and exposes
//! observable `data`, `error` and `is_loading` state. [`AsyncTask::run`] never returns
//! the error: failures are captured into [`AsyncTask::error`].
//!
//! A successful run replaces `data` and clears `error`. A failed run records `error` and
//! keeps the last successful `data`.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use parking_lot::Mutex;

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;
type TaskFn<I, T, E> = dyn Fn(I) -> BoxFuture<Result<T, E>> + Send + Sync;

#[derive(Debug)]
struct TaskState<T, E> {
	data: Option<T>,
	error: Option<E>,
	is_loading: bool,
	runs: u64,
}

impl<T, E> Default for TaskState<T, E> {
	fn default() -> Self {
		Self {
			data: None,
			error: None,
			is_loading: false,
			runs: 0,
		}
	}
}

/// Clears `is_loading` when a run finishes or its future is dropped mid-await.
struct LoadingGuard<'a, T, E> {
	state: &'a Mutex<TaskState<T, E>>,
}

impl<T, E> Drop for LoadingGuard<'_, T, E> {
	fn drop(&mut self) {
		self.state.lock().is_loading = false;
	}
}

/// Shared handle to an async call and its last outcome.
///
/// Clones observe and drive the same state.
pub struct AsyncTask<I, T, E> {
	input: Arc<Mutex<I>>,
	state: Arc<Mutex<TaskState<T, E>>>,
	func: Arc<TaskFn<I, T, E>>,
}

impl<I, T, E> Clone for AsyncTask<I, T, E> {
	fn clone(&self) -> Self {
		Self {
			input: self.input.clone(),
			state: self.state.clone(),
			func: self.func.clone(),
		}
	}
}

impl<I, T, E> AsyncTask<I, T, E>
where
	I: Clone + Send + 'static,
	T: Send + 'static,
	E: std::fmt::Display + Send + 'static,
{
	pub fn new<F, Fut>(input: I, func: F) -> Self
	where
		F: Fn(I) -> Fut + Send + Sync + 'static,
		Fut: Future<Output = Result<T, E>> + Send + 'static,
	{
		Self {
			input: Arc::new(Mutex::new(input)),
			state: Arc::new(Mutex::new(TaskState::default())),
			func: Arc::new(move |input| Box::pin(func(input)) as BoxFuture<Result<T, E>>),
		}
	}

	/// Calls the function with the current input and records the outcome.
	pub async fn run(&self) {
		let input = self.input.lock().clone();
		let run = {
			let mut state = self.state.lock();
			state.is_loading = true;
			state.runs += 1;
			state.runs
		};
		let _loading = LoadingGuard { state: &self.state };
		tracing::trace!(run, "task.start");

		let result = (self.func)(input).await;

		let mut state = self.state.lock();
		match result {
			Ok(data) => {
				state.data = Some(data);
				state.error = None;
			}
			Err(error) => {
				tracing::debug!(run, %error, "task failed");
				state.error = Some(error);
			}
		}
		drop(state);
	}

	pub fn is_loading(&self) -> bool {
		self.state.lock().is_loading
	}

	/// Number of times [`AsyncTask::run`] has been started.
	pub fn runs(&self) -> u64 {
		self.state.lock().runs
	}

	pub fn input(&self) -> I {
		self.input.lock().clone()
	}

	/// Replaces the input used by the next run.
	pub fn set_input(&self, input: I) {
		*self.input.lock() = input;
	}

	/// Reads the last successful result without cloning it.
	pub fn with_data<R>(&self, f: impl FnOnce(Option<&T>) -> R) -> R {
		f(self.state.lock().data.as_ref())
	}

	/// Reads the last captured error without cloning it.
	pub fn with_error<R>(&self, f: impl FnOnce(Option<&E>) -> R) -> R {
		f(self.state.lock().error.as_ref())
	}
}

impl<I, T, E> AsyncTask<I, T, E>
where
	I: Clone + Send + 'static,
	T: Clone + Send + 'static,
	E: Clone + std::fmt::Display + Send + 'static,
{
	pub fn data(&self) -> Option<T> {
		self.state.lock().data.clone()
	}

	pub fn error(&self) -> Option<E> {
		self.state.lock().error.clone()
	}
}

impl<I, T, E> std::fmt::Debug for AsyncTask<I, T, E> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let state = self.state.lock();
		f.debug_struct("AsyncTask")
			.field("is_loading", &state.is_loading)
			.field("has_data", &state.data.is_some())
			.field("has_error", &state.error.is_some())
			.field("runs", &state.runs)
			.finish()
	}
}
