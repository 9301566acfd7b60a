use std::{future::Future, io, time::Duration};

use keep_up_client::{FetchState, KeepUpClientError, QueryWatch};
use tower::Service;

use crate::{
    command::KeepUpOutput, options::OutputFormat, view::Fragment, KeepUpError, KeepUpResult,
};

/// Fetches `request` through `service` and prints `render` of every state the query passes through.
///
/// Without `poll` this returns once the first outcome has been printed. With it, the query is
/// re-issued `poll` after each outcome until ctrl-c or until printing fails.
pub(crate) async fn watch_query<S, R, T, F>(
    service: S,
    request: R,
    poll: Option<Duration>,
    format: OutputFormat,
    render: F,
) -> KeepUpResult<()>
where
    S: Service<R, Response = T, Error = KeepUpClientError>,
    R: Clone,
    F: Fn(&FetchState<T>) -> Fragment,
{
    let print = |fragment: Fragment| -> KeepUpResult<()> {
        KeepUpOutput::view(fragment, format).print()?;
        Ok(())
    };
    run_watch(service, request, poll, render, print, tokio::signal::ctrl_c()).await
}

async fn run_watch<S, R, T, F, E, I>(
    service: S,
    request: R,
    poll: Option<Duration>,
    render: F,
    mut emit: E,
    interrupt: I,
) -> KeepUpResult<()>
where
    S: Service<R, Response = T, Error = KeepUpClientError>,
    R: Clone,
    F: Fn(&FetchState<T>) -> Fragment,
    E: FnMut(Fragment) -> KeepUpResult<()>,
    I: Future<Output = io::Result<()>>,
{
    let watch = QueryWatch::new();
    let mut receiver = watch.subscribe();

    let fetcher = async move {
        let mut service = service;
        loop {
            watch.fetch(&mut service, request.clone()).await;
            let Some(interval) = poll else { break };
            tracing::debug!(?interval, "waiting before the next fetch");
            tokio::time::sleep(interval).await;
        }
        // dropping the watch here closes `receiver` once the last state is seen
        Ok::<(), KeepUpError>(())
    };

    let renderer = async {
        loop {
            emit(render(&*receiver.borrow_and_update()))?;
            if receiver.changed().await.is_err() {
                break;
            }
        }
        Ok::<(), KeepUpError>(())
    };

    let interrupted = async {
        match interrupt.await {
            Ok(()) => tracing::info!("interrupted, stopping"),
            Err(error) => {
                tracing::warn!(%error, "could not listen for ctrl-c, running until done");
                std::future::pending::<()>().await
            }
        }
    };

    tokio::select! {
        finished = async { tokio::try_join!(fetcher, renderer) } => finished.map(|_| ()),
        () = interrupted => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use std::{future, io, time::Duration};

    use anyhow::anyhow;
    use keep_up_client::{FetchState, KeepUpClientError};
    use pretty_assertions::assert_eq;
    use tower::service_fn;
    use tracing_test::traced_test;

    use super::run_watch;
    use crate::view::Fragment;

    fn render(state: &FetchState<String>) -> Fragment {
        match state {
            FetchState::Pending => Fragment::text("pending"),
            FetchState::Failed(_) => Fragment::text("failed"),
            FetchState::Succeeded(name) => Fragment::text(name.as_str()),
        }
    }

    #[tokio::test]
    async fn a_failed_print_stops_polling() {
        let service = service_fn(|_: ()| async { Ok::<_, KeepUpClientError>("Ada".to_string()) });
        let mut printed = 0;

        let result = tokio::time::timeout(
            Duration::from_secs(5),
            run_watch(
                service,
                (),
                Some(Duration::from_millis(10)),
                render,
                |_| {
                    printed += 1;
                    if printed > 1 {
                        Err(anyhow!("stdout is closed").into())
                    } else {
                        Ok(())
                    }
                },
                future::pending::<io::Result<()>>(),
            ),
        )
        .await
        .expect("polling should end once printing fails");

        let error = result.unwrap_err();
        assert!(error.message().contains("stdout is closed"));
        assert_eq!(printed, 2);
    }

    #[traced_test]
    #[tokio::test]
    async fn a_missing_signal_handler_does_not_end_the_watch() {
        let service = service_fn(|_: ()| async { Ok::<_, KeepUpClientError>("Ada".to_string()) });
        let mut seen = Vec::new();

        let result = run_watch(
            service,
            (),
            None,
            render,
            |fragment| {
                seen.push(fragment.to_string());
                Ok(())
            },
            async { Err(io::Error::other("signals unsupported")) },
        )
        .await;

        assert!(result.is_ok());
        assert_eq!(seen.last().map(String::as_str), Some("Ada"));
        assert!(logs_contain("could not listen for ctrl-c"));
    }
}
