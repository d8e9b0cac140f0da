use std::{cell::Cell, rc::Rc};

use tracing::debug;

use crate::{
    controller::Controller,
    loader_error::LoaderError,
    theme::{SubscriptionId, Theme, ThemeSource},
    weight::Weight,
};

/// One user interaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    TargetInput(String),
    SelectBar(Weight),
    ToggleCollars,
    ToggleUnit,
    AddPlate(Weight),
    RemovePlate(usize),
    Clear,
}

/// A mounted calculator: the controller plus the theme it is drawn in.
pub struct Widget {
    controller: Controller,
    theme: Rc<Cell<Theme>>,
    source: Rc<dyn ThemeSource>,
    subscription: Option<SubscriptionId>,
}

impl Widget {
    /// An explicit `theme` pins the widget; without one it follows `source`.
    #[must_use]
    pub fn mount(
        controller: Controller,
        theme: Option<Theme>,
        source: Rc<dyn ThemeSource>,
    ) -> Self {
        let (theme, subscription) = match theme {
            Some(theme) => (Rc::new(Cell::new(theme)), None),
            None => {
                let theme = Rc::new(Cell::new(source.current()));
                let sink = Rc::clone(&theme);
                let id = source.subscribe(Box::new(move |changed| sink.set(changed)));
                (theme, Some(id))
            }
        };
        debug!(theme = %theme.get(), following = subscription.is_some(), "widget mounted");

        Widget {
            controller,
            theme,
            source,
            subscription,
        }
    }

    pub fn unmount(mut self) {
        self.release();
    }

    #[must_use]
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    ///
    /// # Errors
    /// If the event names a bar, plate or position the widget does not offer.
    /// The state is unchanged in that case.
    ///
    pub fn dispatch(&mut self, event: Event) -> Result<(), LoaderError> {
        debug!(?event, "dispatch");
        match event {
            Event::TargetInput(text) => self.controller.set_target_weight(text),
            Event::SelectBar(weight) => self.controller.set_bar_weight(weight)?,
            Event::ToggleCollars => self.controller.toggle_collars(),
            Event::ToggleUnit => self.controller.toggle_unit(),
            Event::AddPlate(weight) => self.controller.add_plate(weight)?,
            Event::RemovePlate(index) => {
                self.controller.remove_plate(index)?;
            }
            Event::Clear => self.controller.clear(),
        }
        Ok(())
    }

    fn release(&mut self) {
        if let Some(id) = self.subscription.take() {
            self.source.unsubscribe(id);
            debug!("widget unmounted");
        }
    }
}

impl Drop for Widget {
    fn drop(&mut self) {
        self.release();
    }
}
