//! Memoized catalog load: at most one fetch in flight, shared by every caller,
//! forgotten on failure so the next caller retries.

use std::cell::RefCell;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture, Shared};

use crate::error::MenuError;
use crate::model::{GameEntry, parse_catalog};
use crate::util::{cerr, clog};

/// Where the raw catalog body comes from.
pub trait CatalogSource {
    fn fetch(&self) -> LocalBoxFuture<'static, Result<String, MenuError>>;
}

pub type CatalogResult = Result<Rc<Vec<GameEntry>>, MenuError>;
pub type SharedLoad = Shared<LocalBoxFuture<'static, CatalogResult>>;

pub struct CatalogLoader<S> {
    source: S,
    slot: Rc<RefCell<Option<SharedLoad>>>,
    games: Rc<RefCell<Option<Rc<Vec<GameEntry>>>>>,
}

impl<S: CatalogSource> CatalogLoader<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            slot: Rc::default(),
            games: Rc::default(),
        }
    }

    /// The current load, started on first use. Every clone resolves to the
    /// same result.
    pub fn load(&self) -> SharedLoad {
        if let Some(pending) = self.slot.borrow().as_ref() {
            return pending.clone();
        }
        let request = self.source.fetch();
        let slot = Rc::clone(&self.slot);
        let games = Rc::clone(&self.games);
        let load = async move {
            let loaded = request
                .await
                .and_then(|body| parse_catalog(&body))
                .map(Rc::new);
            match &loaded {
                Ok(list) => {
                    clog!("loaded {} games", list.len());
                    *games.borrow_mut() = Some(Rc::clone(list));
                }
                Err(err) => {
                    cerr!("failed to load games: {err}");
                    slot.borrow_mut().take();
                }
            }
            loaded
        }
        .boxed_local()
        .shared();
        *self.slot.borrow_mut() = Some(load.clone());
        load
    }

    pub fn is_loaded(&self) -> bool {
        self.games.borrow().is_some()
    }

    pub fn games(&self) -> Option<Rc<Vec<GameEntry>>> {
        self.games.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use futures::future::{join, join3};
    use std::cell::Cell;
    use std::collections::VecDeque;

    const CATALOG: &str = r#"[
        {"name": "Alpha", "cover": "a.png", "url": "games/alpha.html"},
        {"name": "Beta", "cover": "b.png", "url": "https://example.com/beta"},
        {"name": "Gamma", "author": "G", "cover": "g.png", "url": "games/gamma.html"}
    ]"#;

    /// Replays queued responses and counts fetches.
    #[derive(Default)]
    struct ScriptedSource {
        responses: RefCell<VecDeque<Result<String, MenuError>>>,
        calls: Cell<usize>,
    }

    impl ScriptedSource {
        fn with(responses: Vec<Result<String, MenuError>>) -> Self {
            Self {
                responses: RefCell::new(responses.into()),
                calls: Cell::new(0),
            }
        }
    }

    impl CatalogSource for Rc<ScriptedSource> {
        fn fetch(&self) -> LocalBoxFuture<'static, Result<String, MenuError>> {
            self.calls.set(self.calls.get() + 1);
            let next = self
                .responses
                .borrow_mut()
                .pop_front()
                .unwrap_or(Err(MenuError::NotText));
            futures::future::ready(next).boxed_local()
        }
    }

    #[test]
    fn concurrent_callers_share_one_fetch() {
        let source = Rc::new(ScriptedSource::with(vec![Ok(CATALOG.to_string())]));
        let loader = CatalogLoader::new(Rc::clone(&source));

        let (a, b, c) = block_on(join3(loader.load(), loader.load(), loader.load()));
        assert_eq!(source.calls.get(), 1);
        let a = a.unwrap();
        assert_eq!(a.len(), 3);
        assert!(Rc::ptr_eq(&a, &b.unwrap()));
        assert!(Rc::ptr_eq(&a, &c.unwrap()));
        assert!(loader.is_loaded());
    }

    #[test]
    fn resolved_load_is_reused() {
        let source = Rc::new(ScriptedSource::with(vec![Ok(CATALOG.to_string())]));
        let loader = CatalogLoader::new(Rc::clone(&source));

        block_on(loader.load()).unwrap();
        let again = block_on(loader.load()).unwrap();
        assert_eq!(source.calls.get(), 1);
        assert_eq!(again[1].name, "Beta");
        assert!(again[1].is_external);
        assert_eq!(loader.games().map(|g| g.len()), Some(3));
    }

    #[test]
    fn http_failure_rejects_every_waiter_then_retries() {
        let source = Rc::new(ScriptedSource::with(vec![
            Err(MenuError::Status {
                status: 503,
                status_text: "Service Unavailable".into(),
            }),
            Ok(CATALOG.to_string()),
        ]));
        let loader = CatalogLoader::new(Rc::clone(&source));

        let (a, b) = block_on(join(loader.load(), loader.load()));
        assert!(matches!(a, Err(MenuError::Status { status: 503, .. })));
        assert_eq!(a, b);
        assert!(!loader.is_loaded());

        let retried = block_on(loader.load()).unwrap();
        assert_eq!(source.calls.get(), 2);
        assert_eq!(retried.len(), 3);
    }

    #[test]
    fn malformed_body_rejects_then_retries() {
        let source = Rc::new(ScriptedSource::with(vec![
            Ok("not json".to_string()),
            Ok(CATALOG.to_string()),
        ]));
        let loader = CatalogLoader::new(Rc::clone(&source));

        assert!(matches!(
            block_on(loader.load()),
            Err(MenuError::Malformed(_))
        ));
        assert!(block_on(loader.load()).is_ok());
        assert_eq!(source.calls.get(), 2);
    }

    /// Source whose single response arrives only when the test releases it.
    struct GatedSource {
        gate: RefCell<Option<oneshot::Receiver<String>>>,
        calls: Cell<usize>,
    }

    impl CatalogSource for Rc<GatedSource> {
        fn fetch(&self) -> LocalBoxFuture<'static, Result<String, MenuError>> {
            self.calls.set(self.calls.get() + 1);
            let gate = self.gate.borrow_mut().take();
            async move {
                match gate {
                    Some(rx) => rx.await.map_err(|_| MenuError::NotText),
                    None => Err(MenuError::NotText),
                }
            }
            .boxed_local()
        }
    }

    #[test]
    fn caller_arriving_mid_flight_joins_pending_load() {
        let (tx, rx) = oneshot::channel();
        let source = Rc::new(GatedSource {
            gate: RefCell::new(Some(rx)),
            calls: Cell::new(0),
        });
        let loader = CatalogLoader::new(Rc::clone(&source));

        let first = loader.load();
        assert!(first.peek().is_none());
        let second = loader.load();
        tx.send(CATALOG.to_string()).unwrap();

        let (a, b) = block_on(join(first, second));
        assert_eq!(source.calls.get(), 1);
        assert_eq!(a.unwrap().len(), b.unwrap().len());
    }
}
