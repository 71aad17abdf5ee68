use serde::Serialize;

use super::direction::Direction;
use super::grid::Cell;

/// Occupied cells (head first) plus the current heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snake {
    body: Vec<Cell>,
    heading: Direction,
}

impl Snake {
    /// A one-cell snake.
    pub fn new(start: Cell, heading: Direction) -> Self {
        Self {
            body: vec![start],
            heading,
        }
    }

    /// Builds a snake from explicit segments, head first. `None` if `body` is empty.
    pub fn from_body(body: Vec<Cell>, heading: Direction) -> Option<Self> {
        if body.is_empty() {
            return None;
        }
        Some(Self { body, heading })
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    /// Cells that stay occupied after a non-growing move: the tail is vacated.
    pub fn body_excluding_tail(&self) -> &[Cell] {
        &self.body[..self.body.len() - 1]
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Changes heading unless `heading` reverses the current one, which is
    /// ignored. Returns whether the heading was accepted.
    pub fn turn(&mut self, heading: Direction) -> bool {
        if self.heading.is_opposite(heading) {
            return false;
        }
        self.heading = heading;
        true
    }

    /// Where the head lands on the next move.
    pub fn next_head(&self) -> Cell {
        self.head().step(self.heading)
    }

    /// Turns towards `heading` (reversals ignored) and moves one cell.
    /// Grows by keeping the tail when the new head lands on `food`.
    pub fn advance(&mut self, heading: Direction, food: Option<Cell>) -> (Cell, bool) {
        self.turn(heading);
        let new_head = self.next_head();
        let ate_food = food == Some(new_head);

        self.body.insert(0, new_head);
        if !ate_food {
            self.body.pop();
        }
        (new_head, ate_food)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_without_growing() {
        let mut snake = Snake::from_body(
            vec![Cell::new(3, 2), Cell::new(2, 2), Cell::new(1, 2)],
            Direction::Right,
        )
        .unwrap();

        let (head, ate) = snake.advance(Direction::Right, None);

        assert_eq!(head, Cell::new(4, 2));
        assert!(!ate);
        assert_eq!(
            snake.body(),
            &[Cell::new(4, 2), Cell::new(3, 2), Cell::new(2, 2)]
        );
    }

    #[test]
    fn grows_when_eating() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right);

        let (head, ate) = snake.advance(Direction::Down, Some(Cell::new(5, 6)));

        assert_eq!(head, Cell::new(5, 6));
        assert!(ate);
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.tail(), Cell::new(5, 5));
        assert_eq!(snake.heading(), Direction::Down);
    }

    #[test]
    fn reversal_is_ignored() {
        let mut snake = Snake::from_body(
            vec![Cell::new(3, 2), Cell::new(2, 2)],
            Direction::Right,
        )
        .unwrap();

        assert!(!snake.turn(Direction::Left));
        let (head, _) = snake.advance(Direction::Left, None);

        assert_eq!(snake.heading(), Direction::Right);
        assert_eq!(head, Cell::new(4, 2));
    }

    #[test]
    fn reversal_is_ignored_for_single_cell() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Up);
        snake.advance(Direction::Down, None);
        assert_eq!(snake.head(), Cell::new(5, 4));
    }

    #[test]
    fn body_excluding_tail_drops_last_cell() {
        let snake = Snake::from_body(
            vec![Cell::new(2, 2), Cell::new(1, 2), Cell::new(0, 2)],
            Direction::Left,
        )
        .unwrap();
        assert_eq!(snake.body_excluding_tail(), &[Cell::new(2, 2), Cell::new(1, 2)]);
        assert!(
            Snake::new(Cell::new(0, 0), Direction::Up)
                .body_excluding_tail()
                .is_empty()
        );
    }

    #[test]
    fn empty_body_is_rejected() {
        assert!(Snake::from_body(Vec::new(), Direction::Up).is_none());
    }
}
