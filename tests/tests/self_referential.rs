use pretty_assertions::assert_eq;
use rowmap::{BelongsTo, Entity, HasMany, ReaderExt};
use std::sync::Arc;
use tests::rows;

#[derive(Debug, Default, Entity)]
struct Employee {
    id: i32,
    name: String,
    manager: BelongsTo<Employee>,
    reports: HasMany<Employee>,
}

#[derive(Debug, Default, Entity)]
struct Team {
    #[column("Team_Id")]
    id: i32,
    lead: BelongsTo<Member>,
}

#[derive(Debug, Default, Entity)]
struct Member {
    #[column("Member_Id")]
    id: i32,
    team: BelongsTo<Team>,
}

#[test]
fn relation_to_own_type_is_skipped() {
    let rows = rows! {
        ["Id", "Name"],
        [1, "Root"],
        [2, "Leaf"],
    };

    let employees: Vec<Arc<Employee>> = rows.materialize().unwrap();

    assert_eq!(employees.len(), 2);
    for employee in &employees {
        assert!(!employee.manager.is_some());
        assert!(employee.reports.is_empty());
    }
}

#[test]
fn mutual_references_stop_at_the_root_type() {
    let rows = rows! {
        ["Team_Id", "Member_Id"],
        [1, 100],
        [1, 101],
    };

    let teams: Vec<Arc<Team>> = rows.materialize().unwrap();
    assert_eq!(teams.len(), 1);

    // The last row's member is assigned; it never points back to the team
    let lead = teams[0].lead.get().unwrap();
    assert_eq!(lead.id, 101);
    assert!(!lead.team.is_some());
}
