mod card_flow_tests;
