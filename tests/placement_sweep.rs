//! Sweeps every alignment against a spread of bounds, proposals and rules,
//! checking the placement invariants that must hold for any input.

use zenstack::*;

fn bounds_grid() -> Vec<Rect> {
    vec![
        Rect::new(0.0, 0.0, 200.0, 200.0),
        Rect::new(10.0, 20.0, 300.0, 150.0),
        Rect::new(-50.0, -50.0, 80.0, 500.0),
        Rect::new(7.5, 3.25, 1.0, 1.0),
        Rect::new(0.0, 0.0, 0.0, 0.0),
    ]
}

fn proposal_grid() -> Vec<ProposedSize> {
    vec![
        ProposedSize::new(Some(200.0), Some(200.0)),
        ProposedSize::new(Some(0.0), Some(0.0)),
        ProposedSize::new(Some(1000.0), Some(40.0)),
        ProposedSize::new(None, Some(120.0)),
        ProposedSize::UNSPECIFIED,
    ]
}

fn halve(container: Size) -> Size {
    Size::new(container.width / 2.0, -container.height)
}

fn rule_grid() -> Vec<SizingRule> {
    vec![
        SizingRule::Unspecified,
        SizingRule::fraction(0.5, 0.25),
        SizingRule::fraction(-0.5, 0.0),
        SizingRule::references(Size::new(10.0, 10.0), Size::new(100.0, 100.0)),
        SizingRule::references(Size::new(100.0, 100.0), Size::new(10.0, 10.0)),
        SizingRule::slope_intercept(0.5, 20.0),
        SizingRule::slope_intercept(-0.2, 80.0),
        SizingRule::fixed(30.0, 50.0),
        SizingRule::fixed(-3.0, 0.0),
        SizingRule::custom(halve),
    ]
}

fn stack(alignment: Alignment) -> ScalingStack {
    ScalingStack::new(alignment).references(Size::square(128.0), Size::square(256.0))
}

fn is_quantized(v: f64) -> bool {
    v == 0.0 || v == 0.5 || v == 1.0
}

// ---- Anchors ----

#[test]
fn anchor_lies_on_edge_or_center() {
    for alignment in Alignment::ALL {
        for bounds in bounds_grid() {
            let anchor = alignment.anchor_point(bounds);
            assert!(
                [bounds.min_x(), bounds.mid_x(), bounds.max_x()].contains(&anchor.x),
                "{alignment} x in {bounds:?}"
            );
            assert!(
                [bounds.min_y(), bounds.mid_y(), bounds.max_y()].contains(&anchor.y),
                "{alignment} y in {bounds:?}"
            );
        }
    }
}

#[test]
fn unit_points_are_quantized_and_distinct() {
    let mut seen = Vec::new();
    for alignment in Alignment::ALL {
        let u = alignment.unit_point();
        assert!(is_quantized(u.x) && is_quantized(u.y), "{alignment}: {u:?}");
        assert!(!seen.contains(&u), "{alignment} repeats {u:?}");
        seen.push(u);
    }
    assert_eq!(seen.len(), 9);
}

#[test]
fn anchor_is_unit_point_of_bounds() {
    for alignment in Alignment::ALL {
        for bounds in bounds_grid() {
            assert_eq!(
                alignment.anchor_point(bounds),
                bounds.point_at(alignment.unit_point()),
                "{alignment} in {bounds:?}"
            );
        }
    }
}

// ---- Sizes and offsets ----

#[test]
fn clamped_rules_never_size_below_one() {
    for rule in rule_grid() {
        let clamped = matches!(
            rule,
            SizingRule::Fraction(_)
                | SizingRule::References { .. }
                | SizingRule::SlopeIntercept { .. }
                | SizingRule::Fixed(_)
        );
        if !clamped {
            continue;
        }
        for proposal in proposal_grid() {
            let container = proposal.replacing_unspecified();
            let size = stack(Alignment::Center).resolve(&rule, container, Resolution::Size);
            assert!(size.width >= 1.0 && size.height >= 1.0, "{rule:?} at {container:?}: {size:?}");
        }
    }
}

#[test]
fn offsets_pass_through_unclamped() {
    let stack = stack(Alignment::Center);
    let container = Size::square(200.0);
    assert_eq!(
        stack.resolve(&SizingRule::fraction(-0.5, 0.0), container, Resolution::Offset),
        Size::new(-100.0, 0.0)
    );
    assert_eq!(
        stack.resolve(&SizingRule::fixed(-3.0, 0.0), container, Resolution::Offset),
        Size::new(-3.0, 0.0)
    );
    assert_eq!(
        stack.resolve(&SizingRule::slope_intercept(-0.2, 80.0), Size::square(500.0), Resolution::Offset),
        Size::new(-20.0, -20.0)
    );
}

#[test]
fn unspecified_size_is_container_and_offset_is_zero() {
    for proposal in proposal_grid() {
        let container = proposal.replacing_unspecified();
        let stack = stack(Alignment::BottomTrailing);
        assert_eq!(stack.resolve(&SizingRule::Unspecified, container, Resolution::Size), container);
        assert_eq!(
            stack.resolve(&SizingRule::Unspecified, container, Resolution::Offset),
            Size::ZERO
        );
    }
}

#[test]
fn custom_output_is_used_verbatim_in_both_modes() {
    let rule = SizingRule::custom(halve);
    let container = Size::new(64.0, 8.0);
    for mode in [Resolution::Size, Resolution::Offset] {
        assert_eq!(
            stack(Alignment::Top).resolve(&rule, container, mode),
            Size::new(32.0, -8.0)
        );
    }
}

// ---- Placement ----

#[test]
fn placement_is_anchor_plus_offset() {
    for alignment in Alignment::ALL {
        let stack = stack(alignment);
        for bounds in bounds_grid() {
            for proposal in proposal_grid() {
                let container = proposal.replacing_unspecified();
                for offset in rule_grid() {
                    let child = Child::new(()).with_offset(offset.clone());
                    let placement = stack.place_child(bounds, container, &child);
                    let expected = alignment.anchor_point(bounds)
                        + stack.resolve(&offset, container, Resolution::Offset);
                    assert_eq!(placement.position, expected, "{alignment} {offset:?}");
                    assert_eq!(placement.anchor, alignment.unit_point());
                }
            }
        }
    }
}

#[test]
fn unoffset_frame_aligns_with_bounds() {
    // Without an offset, the child's anchor point coincides with the
    // container's: a top-leading child shares the container's top-leading
    // corner, a centered one its center.
    for alignment in Alignment::ALL {
        let stack = stack(alignment);
        let bounds = Rect::new(10.0, 20.0, 300.0, 150.0);
        let child = Child::new(()).with_size(SizingRule::fixed(30.0, 50.0));
        let placement = stack.place_child(bounds, bounds.size(), &child);
        let frame = placement.frame();
        assert_eq!(frame.size(), Size::new(30.0, 50.0));
        assert_eq!(
            frame.point_at(alignment.unit_point()),
            bounds.point_at(alignment.unit_point()),
            "{alignment}"
        );
    }
}

#[test]
fn unspecified_proposal_uses_default_dimension() {
    let stack = stack(Alignment::Center);
    assert_eq!(stack.size_that_fits(ProposedSize::UNSPECIFIED), Size::square(10.0));
    assert_eq!(
        stack.size_that_fits(ProposedSize::new(None, Some(120.0))),
        Size::new(10.0, 120.0)
    );

    let bounds = Rect::new(0.0, 0.0, 10.0, 10.0);
    let placements = stack.placements(
        bounds,
        ProposedSize::UNSPECIFIED,
        &[Child::new(()).with_size(SizingRule::fraction(0.5, 0.5))],
    );
    assert_eq!(placements[0].proposal, Size::new(5.0, 5.0));
}

#[test]
fn placement_is_deterministic() {
    let children: Vec<Child> = rule_grid()
        .into_iter()
        .zip(rule_grid().into_iter().rev())
        .map(|(size, offset)| Child::new(()).with_size(size).with_offset(offset))
        .collect();
    for alignment in Alignment::ALL {
        let stack = stack(alignment);
        for bounds in bounds_grid() {
            for proposal in proposal_grid() {
                let first = stack.placements(bounds, proposal, &children);
                assert_eq!(first.len(), children.len());
                assert_eq!(stack.placements(bounds, proposal, &children), first);
            }
        }
    }
}

#[test]
fn callback_sees_children_in_order() {
    let children: Vec<Child<usize>> = (0..12).map(Child::new).collect();
    let mut seen = Vec::new();
    stack(Alignment::Leading).place_children(
        Rect::new(0.0, 0.0, 50.0, 50.0),
        ProposedSize::new(Some(50.0), Some(50.0)),
        &children,
        |index, child, _| seen.push((index, child.element)),
    );
    let expected: Vec<(usize, usize)> = (0..12).map(|i| (i, i)).collect();
    assert_eq!(seen, expected);
}

#[test]
fn centered_child_with_quarter_size() {
    let stack = ScalingStack::new(Alignment::Center);
    let bounds = Rect::new(0.0, 0.0, 200.0, 200.0);
    let placements = stack.placements(
        bounds,
        ProposedSize::from(bounds.size()),
        &[Child::new(()).with_size(SizingRule::fraction(0.5, 0.5))],
    );
    let p = placements[0];
    assert_eq!(p.position, Point::new(100.0, 100.0));
    assert_eq!(p.anchor, UnitPoint::CENTER);
    assert_eq!(p.proposal, Size::new(100.0, 100.0));
    assert_eq!(p.frame(), Rect::new(50.0, 50.0, 100.0, 100.0));
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_matches_sequential_across_grid() {
    let children: Vec<Child> = (0..64)
        .map(|i| {
            let rules = rule_grid();
            Child::new(())
                .with_size(rules[i % rules.len()].clone())
                .with_offset(rules[(i * 7) % rules.len()].clone())
        })
        .collect();
    for alignment in Alignment::ALL {
        let stack = stack(alignment);
        for bounds in bounds_grid() {
            for proposal in proposal_grid() {
                assert_eq!(
                    stack.par_placements(bounds, proposal, &children),
                    stack.placements(bounds, proposal, &children)
                );
            }
        }
    }
}
