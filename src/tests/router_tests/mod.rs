mod announcement_tests;
mod board_tests;
mod complaint_tests;
mod fee_tests;
