//! Lays out children one after another along an axis.

use smallvec::SmallVec;
use trellis_ui_graphics::{Rect, Size};

use crate::{
    Alignment, Arranged, Axis, AxisFlexibility, AxisPoint, AxisRect, AxisSize, Flex, Flexibility,
    Layout, LayoutMeasurement, LayoutNode, Measured, ViewConfig,
};

/// How a stack allocates axis space that its children did not ask for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StackDistribution {
    /// Children are packed at the start of the axis.
    Leading,
    /// Children are packed at the end of the axis.
    Trailing,
    /// Children are packed in the middle of the axis.
    Center,
    /// Excess space widens the gaps; gaps never shrink below the spacing.
    FillEqualSpacing,
    /// Every child gets the same share of the axis.
    FillEqualSize,
    /// The most flexible child absorbs the excess.
    #[default]
    FillFlexing,
}

/// Configuration of a [`StackLayout`].
#[derive(Clone, Debug)]
pub struct StackSpec {
    pub axis: Axis,
    pub spacing: f32,
    pub distribution: StackDistribution,
    pub alignment: Alignment,
    pub flexibility: Option<Flexibility>,
    pub view: Option<ViewConfig>,
}

impl StackSpec {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            spacing: 0.0,
            distribution: StackDistribution::default(),
            alignment: Alignment::FILL,
            flexibility: None,
            view: None,
        }
    }

    pub fn horizontal() -> Self {
        Self::new(Axis::Horizontal)
    }

    pub fn vertical() -> Self {
        Self::new(Axis::Vertical)
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn distribution(mut self, distribution: StackDistribution) -> Self {
        self.distribution = distribution;
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Overrides the flexibility otherwise derived from the children.
    pub fn flexibility(mut self, flexibility: Flexibility) -> Self {
        self.flexibility = Some(flexibility);
        self
    }

    pub fn view(mut self, view: ViewConfig) -> Self {
        self.view = Some(view);
        self
    }
}

impl Default for StackSpec {
    fn default() -> Self {
        Self::vertical()
    }
}

/// Result of measuring one child slot.
///
/// Children whose turn comes after the budget ran out stay `Skipped` and do
/// not appear in the stack's measurement; `Empty` children are kept but take
/// no spacing.
enum ChildSlot {
    Skipped,
    Empty(LayoutMeasurement),
    Sized(LayoutMeasurement),
}

impl ChildSlot {
    fn into_measurement(self) -> Option<LayoutMeasurement> {
        match self {
            ChildSlot::Skipped => None,
            ChildSlot::Empty(measurement) | ChildSlot::Sized(measurement) => Some(measurement),
        }
    }
}

struct DistributionConfig {
    initial_axis_offset: f32,
    axis_spacing: f32,
    stretch_index: Option<usize>,
}

pub struct StackLayout {
    spec: StackSpec,
    flexibility: Flexibility,
    sublayouts: Vec<LayoutNode>,
}

impl StackLayout {
    pub fn new(spec: StackSpec, sublayouts: Vec<LayoutNode>) -> Self {
        let flexibility = spec
            .flexibility
            .unwrap_or_else(|| Self::default_flexibility(spec.axis, &sublayouts));
        Self {
            spec,
            flexibility,
            sublayouts,
        }
    }

    pub fn spec(&self) -> &StackSpec {
        &self.spec
    }

    pub fn sublayouts(&self) -> &[LayoutNode] {
        &self.sublayouts
    }

    /// As flexible along the axis as the most flexible child, and across it
    /// as the least flexible one.
    pub fn default_flexibility(axis: Axis, sublayouts: &[LayoutNode]) -> Flexibility {
        let initial = AxisFlexibility::from_flexes(axis, None, Flexibility::MAX_FLEX);
        sublayouts
            .iter()
            .fold(initial, |combined, sublayout| {
                let child = AxisFlexibility::new(axis, sublayout.flexibility());
                AxisFlexibility::from_flexes(
                    axis,
                    Flexibility::max_flex(combined.axis_flex(), child.axis_flex()),
                    Flexibility::min_flex(combined.cross_flex(), child.cross_flex()),
                )
            })
            .flexibility
    }

    /// Axis length each child gets under [`StackDistribution::FillEqualSize`].
    ///
    /// When the spacing leaves no room for every child, only as many children
    /// as fit get a share.
    pub fn sublayout_space_for_equal_size_distribution(
        &self,
        total_available_space: f32,
        sublayout_count: usize,
    ) -> f32 {
        if sublayout_count == 0 {
            return total_available_space;
        }
        let spacing = self.spec.spacing;
        if spacing == 0.0 {
            return (total_available_space / sublayout_count as f32).max(0.0);
        }
        let gaps = (total_available_space / spacing).floor();
        let visible = (sublayout_count as f32).min(gaps + 1.0).max(1.0);
        let share = (total_available_space - (visible - 1.0) * spacing) / visible;
        share.max(0.0)
    }

    /// Child indices, least flexible along the axis first; ties keep child order.
    fn sublayouts_by_axis_flexibility_ascending(&self) -> SmallVec<[usize; 8]> {
        let axis = self.spec.axis;
        let mut order: SmallVec<[(Flex, usize); 8]> = self
            .sublayouts
            .iter()
            .enumerate()
            .map(|(index, sublayout)| (sublayout.flexibility().flex(axis), index))
            .collect();
        order.sort();
        order.into_iter().map(|(_, index)| index).collect()
    }

    /// Index of the most flexible measured child; later children win ties.
    fn stretchable_sublayout_index(&self, sublayouts: &[LayoutMeasurement]) -> Option<usize> {
        let axis = self.spec.axis;
        let mut best: Option<(usize, Flex)> = None;
        for (index, sublayout) in sublayouts.iter().enumerate() {
            let flex = sublayout.layout.flexibility().flex(axis);
            match best {
                Some((_, best_flex)) if flex < best_flex => {}
                _ => best = Some((index, flex)),
            }
        }
        best.and_then(|(index, flex)| flex.map(|_| index))
    }

    fn distribution_config(
        &self,
        excess_axis_length: f32,
        sublayouts: &[LayoutMeasurement],
    ) -> DistributionConfig {
        let spacing = self.spec.spacing;
        let (initial_axis_offset, axis_spacing, stretch_index) = match self.spec.distribution {
            StackDistribution::Leading => (0.0, spacing, None),
            StackDistribution::Trailing => (excess_axis_length, spacing, None),
            StackDistribution::Center => (excess_axis_length / 2.0, spacing, None),
            StackDistribution::FillEqualSpacing => {
                let gaps = sublayouts.len().saturating_sub(1);
                let axis_spacing = if gaps == 0 {
                    spacing
                } else {
                    spacing.max(excess_axis_length / gaps as f32)
                };
                (0.0, axis_spacing, None)
            }
            StackDistribution::FillEqualSize => (0.0, spacing, None),
            StackDistribution::FillFlexing => {
                let stretch_index = if excess_axis_length > 0.0 {
                    self.stretchable_sublayout_index(sublayouts)
                } else {
                    None
                };
                (0.0, spacing, stretch_index)
            }
        };
        DistributionConfig {
            initial_axis_offset,
            axis_spacing,
            stretch_index,
        }
    }
}

impl Layout for StackLayout {
    fn measure(&self, max_size: Size) -> Measured {
        let axis = self.spec.axis;
        let spacing = self.spec.spacing;
        let mut available = AxisSize::new(axis, max_size);
        let mut used = AxisSize::new(axis, Size::ZERO);
        let equal_share = (self.spec.distribution == StackDistribution::FillEqualSize).then(|| {
            self.sublayout_space_for_equal_size_distribution(
                available.axis_length(),
                self.sublayouts.len(),
            )
        });

        let mut slots: Vec<ChildSlot> = self.sublayouts.iter().map(|_| ChildSlot::Skipped).collect();
        for index in self.sublayouts_by_axis_flexibility_ascending() {
            if available.axis_length() <= 0.0 || available.cross_length() <= 0.0 {
                log::trace!(
                    "stack budget exhausted; skipping child {index} and later children"
                );
                break;
            }
            let child_max_size = match equal_share {
                Some(share) => AxisSize::from_lengths(axis, share, available.cross_length()).size,
                None => available.size,
            };
            let measurement = self.sublayouts[index].measurement(child_max_size);
            let child_size = AxisSize::new(axis, measurement.size);
            if child_size.axis_length() > 0.0 {
                let gap = if used.axis_length() > 0.0 { spacing } else { 0.0 };
                used.set_axis_length(used.axis_length() + gap + child_size.axis_length());
                // Reserve spacing for the next child.
                available
                    .set_axis_length(available.axis_length() - child_size.axis_length() - spacing);
                slots[index] = ChildSlot::Sized(measurement);
            } else {
                slots[index] = ChildSlot::Empty(measurement);
            }
            used.set_cross_length(used.cross_length().max(child_size.cross_length()));
        }

        let sublayouts: Vec<LayoutMeasurement> =
            slots.into_iter().filter_map(ChildSlot::into_measurement).collect();

        if equal_share.is_some() && !sublayouts.is_empty() {
            let widest = sublayouts
                .iter()
                .map(|sublayout| AxisSize::new(axis, sublayout.size).axis_length())
                .fold(0.0_f32, f32::max);
            let count = sublayouts.len() as f32;
            used.set_axis_length(((widest + spacing) * count - spacing).max(0.0));
        }

        Measured {
            size: used.size.decreased_to(max_size),
            sublayouts,
        }
    }

    fn arrange(&self, rect: Rect, measurement: &LayoutMeasurement) -> Arranged {
        let axis = self.spec.axis;
        let frame = self.spec.alignment.position(measurement.size, rect);
        let available = AxisSize::new(axis, frame.size());
        let excess_axis_length =
            available.axis_length() - AxisSize::new(axis, measurement.size).axis_length();
        let config = self.distribution_config(excess_axis_length, &measurement.sublayouts);
        let equal_share = (self.spec.distribution == StackDistribution::FillEqualSize).then(|| {
            self.sublayout_space_for_equal_size_distribution(
                available.axis_length(),
                measurement.sublayouts.len(),
            )
        });

        let mut next_origin = AxisPoint::from_offsets(axis, config.initial_axis_offset, 0.0);
        let sublayouts = measurement
            .sublayouts
            .iter()
            .enumerate()
            .map(|(index, sublayout)| {
                let mut allotted = AxisSize::new(axis, sublayout.size);
                allotted.set_cross_length(available.cross_length());
                if let Some(share) = equal_share {
                    allotted.set_axis_length(share);
                } else if config.stretch_index == Some(index) {
                    allotted.set_axis_length(allotted.axis_length() + excess_axis_length);
                }
                let child_rect = AxisRect::from_parts(axis, next_origin, allotted).rect;
                let arrangement = sublayout.arrangement(child_rect);

                let mut advance = allotted.axis_length();
                if allotted.axis_length() > 0.0 {
                    advance += config.axis_spacing;
                }
                next_origin.set_axis_offset(next_origin.axis_offset() + advance);
                arrangement
            })
            .collect();

        Arranged { frame, sublayouts }
    }

    fn flexibility(&self) -> Flexibility {
        self.flexibility
    }

    fn view_config(&self) -> Option<&ViewConfig> {
        self.spec.view.as_ref()
    }

    fn debug_name(&self) -> &str {
        "Stack"
    }
}
