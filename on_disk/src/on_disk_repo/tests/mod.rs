mod put_object;
