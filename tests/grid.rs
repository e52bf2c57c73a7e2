use matrix_grid::grid::Position;
use matrix_grid::index::{Column, Line, Point};
use matrix_grid::{Dimensions, Error, Grid};

fn init_logger() {
    let _ = env_logger::try_init();
}

fn point(line: isize, column: isize) -> Point {
    Point::new(Line(line), Column(column))
}

fn expected(rows: &[&[&'static str]]) -> Grid<&'static str> {
    Grid::from_rows(rows.iter().map(|row| row.to_vec()).collect(), " ").unwrap()
}

/// Read-only consumer, the way a printing helper would see the grid.
fn render<D: Dimensions>(dimensions: &D, cell: impl Fn(Point) -> String) -> String {
    let mut text = String::new();
    for line in 0..dimensions.lines() {
        let cells: Vec<_> =
            (0..dimensions.columns()).map(|column| cell(point(line as isize, column as isize))).collect();
        text.push_str(&cells.join("|"));
        text.push('\n');
    }
    text
}

#[test]
fn assorted_structural_edits() {
    init_logger();

    let mut strings = Grid::new(2, 2, " ").unwrap();
    assert_eq!(strings, expected(&[&[" ", " "], &[" ", " "]]));

    strings.fill_region(point(0, 0), point(2, 2), "wow").unwrap();
    assert_eq!(strings, expected(&[&["wow", "wow"], &["wow", "wow"]]));

    strings.insert_row(Line(2)).unwrap();
    assert_eq!(strings, expected(&[&["wow", "wow"], &["wow", "wow"], &[" ", " "]]));

    strings.insert_column(Column(2)).unwrap();
    assert_eq!(
        strings,
        expected(&[&["wow", "wow", " "], &["wow", "wow", " "], &[" ", " ", " "]])
    );

    strings.delete_column(Column(0)).unwrap();
    assert_eq!(strings, expected(&[&["wow", " "], &["wow", " "], &[" ", " "]]));

    strings.delete_row(Line(1)).unwrap();
    assert_eq!(strings, expected(&[&["wow", " "], &[" ", " "]]));
}

#[test]
fn inserted_values_land_in_place() {
    init_logger();

    let mut grid = Grid::from_rows(vec![vec!["a", "b"], vec!["c", "d"]], " ").unwrap();

    grid.insert_row_with(Line(1), vec!["x", "y"]).unwrap();
    grid.insert_column_with(Column(0), vec!["1", "2", "3"]).unwrap();

    assert_eq!(
        grid,
        expected(&[&["1", "a", "b"], &["2", "x", "y"], &["3", "c", "d"]])
    );
}

#[test]
fn failed_operations_leave_grid_untouched() {
    init_logger();

    let mut grid = Grid::from_rows(vec![vec![1, 2], vec![3, 4]], 0).unwrap();
    let before = grid.clone();

    assert!(grid.insert_row_with(Line(0), vec![9]).is_err());
    assert!(grid.insert_column_with(Column(0), vec![9, 9, 9]).is_err());
    assert!(grid.insert_row(Line(3)).is_err());
    assert!(grid.delete_column(Column(2)).is_err());
    assert!(grid.fill_region(point(0, 0), point(3, 1), 9).is_err());
    assert!(grid.fill_line(point(0, -1), Point::new(1, 1), point(2, 2), 9).is_err());
    assert!(grid.set(Line(-1), Column(0), 9).is_err());

    assert_eq!(grid, before);
}

#[test]
fn errors_are_std_errors() {
    let error: Box<dyn std::error::Error> = Box::new(Grid::new(-2, 1, 0).unwrap_err());
    assert_eq!(error.to_string(), "Invalid grid dimensions -2x1, must not be negative");

    let grid = Grid::new(1, 1, 0).unwrap();
    assert_eq!(
        grid.get(Line(0), Column(1)).unwrap_err(),
        Error::OutOfBounds(Position::Point(point(0, 1)))
    );
}

#[test]
fn consumers_need_only_read_access() {
    let mut grid = Grid::new(3, 2, ".").unwrap();
    grid.fill_line(point(0, 0), Point::new(1, 1), point(2, 3), "#").unwrap();

    let text = render(&grid, |point| grid.get(point.line, point.column).unwrap().to_string());

    assert_eq!(text, "#|.|.\n.|#|.\n");
}
