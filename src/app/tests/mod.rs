mod frame_clock_tests;
