use tracing::{debug, warn};

use crate::{
    bar::Bar,
    event::Event,
    loader_error::LoaderError,
    plate_store::PlateStore,
    presenter::{self, Assets, Frame, Total},
};

/// State of one loading session: the active bar, the sleeve and its latest frame.
#[derive(Debug)]
pub struct Session {
    bar: Bar,
    store: PlateStore,
    assets: Assets,
    frame: Frame,
}

impl Session {
    #[must_use]
    pub fn new(bar: Bar, assets: Assets) -> Self {
        let store = PlateStore::new();
        let frame = presenter::render(&store, &bar, &assets);
        Session {
            bar,
            store,
            assets,
            frame,
        }
    }

    ///
    /// # Errors
    /// If the event refers to a plate that is not on the sleeve. The session is left unchanged.
    ///
    pub fn apply(&mut self, event: Event) -> Result<&Frame, LoaderError> {
        debug!(%event, "applying event");
        self.mutate(event)
            .inspect_err(|err| warn!(%err, "event rejected"))?;
        self.frame = presenter::render(&self.store, &self.bar, &self.assets);
        Ok(&self.frame)
    }

    fn mutate(&mut self, event: Event) -> Result<(), LoaderError> {
        match event {
            Event::SelectBar(bar) => {
                debug!(%bar, image = bar.image(), "bar selected");
                self.bar = bar;
            }
            Event::Add(plate) => self.store.add(plate),
            Event::RemoveLast => {
                self.store.remove_last();
            }
            Event::RemoveAt(index) => {
                let handle = self.frame.left.get(index).map(|view| view.handle).ok_or(
                    LoaderError::IndexOutOfRange {
                        index,
                        len: self.store.len(),
                    },
                )?;
                self.store.remove(handle)?;
            }
            Event::Reset => self.store.reset(),
        }
        Ok(())
    }

    #[must_use]
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    #[must_use]
    pub fn bar(&self) -> &Bar {
        &self.bar
    }

    #[must_use]
    pub fn store(&self) -> &PlateStore {
        &self.store
    }

    #[must_use]
    pub fn total(&self) -> Total {
        self.frame.total
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new(Bar::default(), Assets::default())
    }
}
