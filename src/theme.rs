use std::{
    cell::{Cell, RefCell},
    fmt::Display,
    rc::Rc,
    str::FromStr,
};

use tracing::debug;

use crate::loader_error::LoaderError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = LoaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(LoaderError::InvalidTheme(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub usize);

pub type ThemeCallback = Box<dyn Fn(Theme)>;

/// The host's light/dark signal.
pub trait ThemeSource {
    fn current(&self) -> Theme;
    fn subscribe(&self, callback: ThemeCallback) -> SubscriptionId;
    fn unsubscribe(&self, id: SubscriptionId);
}

/// A theme signal the host pushes changes into.
#[derive(Default)]
pub struct AmbientTheme {
    theme: Cell<Theme>,
    next_id: Cell<usize>,
    subscribers: RefCell<Vec<(SubscriptionId, Rc<dyn Fn(Theme)>)>>,
}

impl AmbientTheme {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        AmbientTheme {
            theme: Cell::new(theme),
            ..AmbientTheme::default()
        }
    }

    /// Reads the terminal background from `COLORFGBG`, light when unset.
    #[must_use]
    pub fn from_env() -> Self {
        let theme = std::env::var("COLORFGBG")
            .ok()
            .and_then(|value| theme_from_colorfgbg(&value))
            .unwrap_or_default();
        AmbientTheme::new(theme)
    }

    /// Notifies subscribers only when the theme actually changes. Callbacks
    /// may subscribe or unsubscribe; they see the list as it was before the
    /// change.
    pub fn set(&self, theme: Theme) {
        if self.theme.replace(theme) == theme {
            return;
        }

        let callbacks = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect::<Vec<_>>();
        debug!(%theme, subscribers = callbacks.len(), "ambient theme changed");
        for callback in callbacks {
            callback(theme);
        }
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }
}

impl ThemeSource for AmbientTheme {
    fn current(&self) -> Theme {
        self.theme.get()
    }

    fn subscribe(&self, callback: ThemeCallback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.subscribers.borrow_mut().push((id, Rc::from(callback)));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers
            .borrow_mut()
            .retain(|(subscription, _)| *subscription != id);
    }
}

// "fg;bg" or "fg;default;bg"; backgrounds 0-6 and 8 are dark palette entries.
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let background = value.rsplit(';').next()?.trim().parse::<u8>().ok()?;
    Some(match background {
        0..=6 | 8 => Theme::Dark,
        _ => Theme::Light,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_colorfgbg_background() {
        assert_eq!(theme_from_colorfgbg("15;0"), Some(Theme::Dark));
        assert_eq!(theme_from_colorfgbg("0;default;15"), Some(Theme::Light));
        assert_eq!(theme_from_colorfgbg("7;8"), Some(Theme::Dark));
        assert_eq!(theme_from_colorfgbg("garbage"), None);
    }

    #[test]
    fn notifies_until_unsubscribed() {
        let source = AmbientTheme::new(Theme::Light);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        let id = source.subscribe(Box::new(move |theme| sink.borrow_mut().push(theme)));

        source.set(Theme::Dark);
        source.set(Theme::Dark);
        source.unsubscribe(id);
        source.set(Theme::Light);

        assert_eq!(*seen.borrow(), vec![Theme::Dark]);
        assert_eq!(source.subscriber_count(), 0);
        assert_eq!(source.current(), Theme::Light);
    }

    #[test]
    fn subscriber_can_unsubscribe_itself() {
        let source = Rc::new(AmbientTheme::new(Theme::Light));
        let own_id = Rc::new(Cell::new(None));
        let calls = Rc::new(Cell::new(0));

        let weak = Rc::downgrade(&source);
        let id_slot = Rc::clone(&own_id);
        let counter = Rc::clone(&calls);
        let id = source.subscribe(Box::new(move |_| {
            counter.set(counter.get() + 1);
            if let (Some(source), Some(id)) = (weak.upgrade(), id_slot.get()) {
                source.unsubscribe(id);
            }
        }));
        own_id.set(Some(id));

        source.set(Theme::Dark);
        source.set(Theme::Light);

        assert_eq!(calls.get(), 1);
        assert_eq!(source.subscriber_count(), 0);
    }
}
