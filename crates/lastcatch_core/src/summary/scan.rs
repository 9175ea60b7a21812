use crate::save::{CreatureSlot, SaveModel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotLocation {
    Party { index: usize },
    Box { box_index: usize, slot: usize },
}

#[derive(Debug, Clone, Copy)]
pub struct ScannedSlot<'a> {
    pub location: SlotLocation,
    pub slot: &'a CreatureSlot,
}

/// Every occupied slot: party first, then boxes in box-major, slot-minor
/// order. Absent slots and slots with species 0 are skipped.
pub fn scan_slots<'a, M>(model: &'a M) -> impl Iterator<Item = ScannedSlot<'a>> + 'a
where
    M: SaveModel + ?Sized,
{
    let party = (0..model.party_count()).filter_map(move |index| {
        occupied(model.party_slot(index)).map(|slot| ScannedSlot {
            location: SlotLocation::Party { index },
            slot,
        })
    });

    let slot_count = model.box_slot_count();
    let boxes = (0..model.box_count()).flat_map(move |box_index| {
        (0..slot_count).filter_map(move |slot| {
            occupied(model.box_slot(box_index, slot)).map(|found| ScannedSlot {
                location: SlotLocation::Box { box_index, slot },
                slot: found,
            })
        })
    });

    party.chain(boxes)
}

fn occupied(slot: Option<&CreatureSlot>) -> Option<&CreatureSlot> {
    slot.filter(|s| !s.is_empty())
}
