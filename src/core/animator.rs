use crate::page::{Document, Rect, UnitId, ANIMATION_CLASS, VISIBLE_CLASS};
use std::collections::BTreeSet;

/// Reveals cards the first time enough of them scrolls into view.
///
/// Units stay observed after being revealed; later viewport changes leave
/// them marked and do not report them again. Observing the same unit twice
/// is a no-op.
#[derive(Debug, Clone)]
pub struct VisibilityAnimator {
    threshold: f64,
    observed: BTreeSet<UnitId>,
}

impl VisibilityAnimator {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            observed: BTreeSet::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Starts observing `units`. Returns how many were not observed before.
    pub fn observe<I>(&mut self, units: I) -> usize
    where
        I: IntoIterator<Item = UnitId>,
    {
        units
            .into_iter()
            .filter(|id| self.observed.insert(*id))
            .count()
    }

    /// Observes every unit in the document that carries the animation class.
    pub fn observe_document(&mut self, document: &Document) -> usize {
        self.observe(document.units_with_class(ANIMATION_CLASS))
    }

    pub fn is_observing(&self, id: UnitId) -> bool {
        self.observed.contains(&id)
    }

    pub fn observed_count(&self) -> usize {
        self.observed.len()
    }

    /// Evaluates every observed unit against `viewport` and marks those at or
    /// above the threshold. Returns the units revealed by this call only.
    ///
    /// Units that were removed from the document are dropped from the
    /// observed set.
    pub fn on_viewport(&mut self, document: &mut Document, viewport: &Rect) -> Vec<UnitId> {
        let mut revealed = Vec::new();
        let mut detached = Vec::new();

        for id in &self.observed {
            let Some(unit) = document.unit_mut(*id) else {
                detached.push(*id);
                continue;
            };
            let Some(bounds) = unit.bounds else {
                continue;
            };

            let ratio = bounds.visible_ratio(viewport);
            if ratio > 0.0 && ratio >= self.threshold && unit.classes.add(VISIBLE_CLASS) {
                tracing::trace!("Unit {} revealed at ratio {:.2}", id.value(), ratio);
                revealed.push(*id);
            }
        }

        for id in detached {
            self.observed.remove(&id);
        }
        revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::site::SiteSettings;
    use crate::page::{Card, CardKind, ContainerId};

    const VIEWPORT: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 1000.0,
        height: 800.0,
    };

    fn doc_with_cards(n: usize) -> (Document, Vec<UnitId>) {
        let mut doc = Document::new(SiteSettings::default());
        let ids = (0..n)
            .filter_map(|i| {
                doc.append_card(
                    ContainerId::Skills,
                    Card {
                        kind: CardKind::Skill,
                        inner_html: format!("card {}", i),
                    },
                )
            })
            .collect();
        (doc, ids)
    }

    fn viewport_at(scroll_y: f64) -> Rect {
        Rect {
            y: scroll_y,
            ..VIEWPORT
        }
    }

    #[test]
    fn test_unit_outside_viewport_stays_hidden() {
        let (mut doc, ids) = doc_with_cards(1);
        doc.set_bounds(ids[0], Rect::new(0.0, 2000.0, 300.0, 200.0));

        let mut animator = VisibilityAnimator::new(0.1);
        animator.observe(ids.clone());

        assert!(animator.on_viewport(&mut doc, &VIEWPORT).is_empty());
        assert!(!doc.unit(ids[0]).unwrap().is_visible());
    }

    #[test]
    fn test_threshold_crossing_marks_once() {
        let (mut doc, ids) = doc_with_cards(1);
        let id = ids[0];
        // 200px tall card starting at y=1000
        doc.set_bounds(id, Rect::new(0.0, 1000.0, 300.0, 200.0));

        let mut animator = VisibilityAnimator::new(0.1);
        animator.observe([id]);

        // 19px of 200 visible: below 10%
        assert!(animator.on_viewport(&mut doc, &viewport_at(219.0)).is_empty());
        assert!(!doc.unit(id).unwrap().is_visible());

        // 20px of 200 visible: exactly 10%
        assert_eq!(animator.on_viewport(&mut doc, &viewport_at(220.0)), vec![id]);
        assert!(doc.unit(id).unwrap().is_visible());

        // further events neither duplicate nor unmark
        assert!(animator.on_viewport(&mut doc, &viewport_at(600.0)).is_empty());
        assert!(animator.on_viewport(&mut doc, &viewport_at(0.0)).is_empty());
        let unit = doc.unit(id).unwrap();
        assert!(unit.is_visible());
        assert_eq!(unit.classes.to_attr(), "skill-card fade-in visible");
        assert!(animator.is_observing(id));
    }

    #[test]
    fn test_reobserving_superset_is_idempotent() {
        let (mut doc, ids) = doc_with_cards(3);
        for (i, id) in ids.iter().enumerate() {
            doc.set_bounds(*id, Rect::new(0.0, i as f64 * 300.0, 300.0, 200.0));
        }

        let mut animator = VisibilityAnimator::new(0.1);
        assert_eq!(animator.observe(ids[..1].iter().copied()), 1);
        assert_eq!(animator.on_viewport(&mut doc, &VIEWPORT), vec![ids[0]]);

        assert_eq!(animator.observe_document(&doc), 2);
        assert_eq!(animator.observe_document(&doc), 0);
        assert_eq!(animator.observed_count(), 3);

        let revealed = animator.on_viewport(&mut doc, &VIEWPORT);
        assert_eq!(revealed, vec![ids[1], ids[2]]);
        assert_eq!(doc.units_with_class(VISIBLE_CLASS).len(), 3);
    }

    #[test]
    fn test_units_without_layout_never_intersect() {
        let (mut doc, ids) = doc_with_cards(2);
        let mut animator = VisibilityAnimator::new(0.1);
        animator.observe(ids);

        assert!(animator.on_viewport(&mut doc, &VIEWPORT).is_empty());
    }

    #[test]
    fn test_removed_units_are_dropped() {
        let (mut doc, ids) = doc_with_cards(2);
        let mut animator = VisibilityAnimator::new(0.1);
        animator.observe(ids);

        doc.container_mut(ContainerId::Skills).unwrap().clear();
        animator.on_viewport(&mut doc, &VIEWPORT);
        assert_eq!(animator.observed_count(), 0);
    }
}
