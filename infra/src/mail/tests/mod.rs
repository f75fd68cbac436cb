mod mock_mail_tests;
