//! Change-Notifier: verteilt den Kurvenzustand nach jedem Frame an Observer.

use crate::core::CurveCoordinates;

/// Callback, der nach jedem Frame den aktuellen Kurvenzustand erhält.
pub type CurveCallback = Box<dyn FnMut(&CurveCoordinates)>;

/// Token einer Registrierung, für `unsubscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Geordnete Observer-Liste (Registrierungsreihenfolge = Aufrufreihenfolge).
#[derive(Default)]
pub struct CurveObservers {
    next_id: u64,
    entries: Vec<(SubscriptionId, CurveCallback)>,
}

impl CurveObservers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt einen Observer an das Ende der Liste an.
    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&CurveCoordinates) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        id
    }

    /// Entfernt einen Observer. Gibt `false` zurück, wenn das Token unbekannt ist.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Ruft alle Observer in Registrierungsreihenfolge auf.
    pub fn notify(&mut self, curve: &CurveCoordinates) {
        for (_, callback) in &mut self.entries {
            callback(curve);
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for CurveObservers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurveObservers")
            .field("len", &self.entries.len())
            .finish()
    }
}
